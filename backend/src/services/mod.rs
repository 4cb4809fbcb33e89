//! Business logic services
//!
//! Services are stateless unit structs; they take the store and any
//! collaborators as arguments rather than holding them.

pub mod enhancer;
pub mod goals;
pub mod summary;
pub mod users;

pub use goals::GoalService;
pub use summary::SummaryService;
pub use users::UserService;
