//! A2UI - renderer-agnostic UI specification language
//!
//! A2UI describes a dashboard as a tree of typed component nodes. The tree
//! is produced by an agent deciding which components fit the insights it
//! found, and consumed by whatever renderer sits on the other side of the
//! wire. Nothing in here knows about markup or styling.
//!
//! # Structure
//!
//! ```text
//! dashboard                    # always the root
//! ├── grid                     # containers own their children
//! │   ├── card
//! │   └── card
//! ├── lineChart                # leaves carry their own data
//! └── table
//! ```
//!
//! # Example
//!
//! ```
//! use a2ui::{A2UISpec, ComponentNode, ScalarValue};
//!
//! let spec = A2UISpec::dashboard(
//!     "GitHub Overview",
//!     None,
//!     vec![ComponentNode::Card {
//!         title: "Total Commits".to_string(),
//!         value: ScalarValue::Int(312),
//!         subtitle: None,
//!     }],
//! );
//! assert_eq!(spec.root().kind(), "dashboard");
//! ```

mod component;
mod spec;
mod value;

pub use component::ComponentNode;
pub use spec::{A2UISpec, PathError};
pub use value::{CategoryShare, NamedSeries, ScalarValue, SeriesPoint, TableRow};
