//! Dybo's Rule evaluation core
//!
//! This crate asks, for each verb of an annotated corpus, whether some
//! assignment of underlying accents to its root and preverb elements makes
//! Dybo's Rule predict the observed stress of all seven inflected forms.
//!
//! # Architecture
//!
//! Everything here is deterministic and free of I/O:
//! - [`segment`] splits roots and preverbs into prosodic elements
//! - [`accent`] assigns the accents of functional morphemes
//! - [`stress`] implements Dybo's Rule and its pre-stress exceptions
//! - [`hypothesis`] enumerates candidate accent assignments lazily
//! - [`search`] scores hypotheses and keeps the best one
//!
//! # Example
//!
//! ```rust
//! use dybo_core::{Accent, dybo_rule};
//!
//! let accents = [Accent::Unaccented, Accent::Accented, Accent::Unaccented];
//! let tags = ["C1", "R0", "INF"];
//! assert_eq!(dybo_rule(&accents, &tags), Some(1));
//! ```

pub mod accent;
pub mod config;
pub mod error;
pub mod gloss;
pub mod hypothesis;
pub mod phonology;
pub mod search;
pub mod segment;
pub mod stress;
pub mod verb;

pub use accent::{Accent, AccentTable, Assignment, AssignmentContext, Method};
pub use config::EvaluationConfig;
pub use error::{CoreError, Result};
pub use gloss::count_elements;
pub use hypothesis::{AccentHypotheses, AccentHypothesis};
pub use phonology::PhonemeClassTable;
pub use search::{Evaluation, HypothesisSearch, SearchOutcome, VerbOutcome};
pub use segment::{segment_morpheme, split_elements, CausativePrefix, SegmentedForm};
pub use stress::{dybo_rule, Prediction, StressPredictor, StressRule};
pub use verb::{AllomorphyKind, FormKind, FormSlot, Preparation, PreparedVerb, VerbEntry, FORM_COUNT};
