//! Repository implementations.

pub mod chat;
pub mod push_subscription;
pub mod user;

pub use chat::ChatRepository;
pub use push_subscription::PushSubscriptionRepository;
pub use user::UserRepository;
