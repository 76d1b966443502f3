//! Application-state controller for `SparkStream`.
//!
//! [`Studio`] owns everything the front end shows: the simulated session,
//! the current view, saved posts, the editor, and one [`Slot`] per AI view.
//! Slots hand out request tickets so that only the newest request for a view
//! can write its result.

pub mod collab;
pub mod editor;
pub mod error;
pub mod post_id;
pub mod reports;
pub mod slot;
pub mod studio;

pub use collab::{payment_prompt, CollabHub, ConnectOutcome};
pub use editor::{Editor, Variation};
pub use error::StudioError;
pub use post_id::PostIdGenerator;
pub use reports::{
    admin_overview, analytics_report, AdminOverview, AnalyticsReport, DashboardSummary,
};
pub use slot::{Slot, Ticket};
pub use studio::{Pending, Studio};
