use crate::model::{id::UserId, role::Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct SpaceOwner {
    pub owner_id: UserId,
    pub owner_name: String,
}
