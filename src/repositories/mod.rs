pub mod check;
pub mod url;

pub use self::check::{CheckRepository, CheckRepositoryTrait};
pub use self::url::{UrlRepository, UrlRepositoryTrait};
