pub mod favorites;
pub mod profile;
pub mod refresh_gate;
pub mod session;
pub mod store;

pub use favorites::{FavoriteAction, Favorites};
pub use profile::{QuestionnaireAnswers, UserId, UserProfile};
pub use refresh_gate::{GateState, RefreshOutcome, RefreshState, REFRESH_COOLDOWN_DAYS};
pub use session::SessionSnapshot;
pub use store::ProfileStore;
