use strum::{AsRefStr, EnumString};

/// Caller role as resolved by the identity layer. Subscribed and Admin
/// callers are exempt from the booking commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
pub enum Role {
    Admin,
    Subscribed,
    Verified,
    User,
}
