
pub use app::{create_user, make_test_app, send};
