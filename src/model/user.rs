use sea_orm::{ActiveValue, IntoActiveModel};
use serde::Deserialize;

use crate::cruder::Cruder;

/// Record accessor for `user` rows.
pub type UserCruder<'a> = Cruder<'a, entity::user::Entity, CreateUser, UpdateUser>;

/// Input for creating a user. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUser {
    pub name: String,
}

/// Partial input for updating or filtering users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateUser {
    pub name: Option<String>,
}

impl IntoActiveModel<entity::user::ActiveModel> for CreateUser {
    fn into_active_model(self) -> entity::user::ActiveModel {
        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
    }
}

impl IntoActiveModel<entity::user::ActiveModel> for UpdateUser {
    fn into_active_model(self) -> entity::user::ActiveModel {
        entity::user::ActiveModel {
            name: self.name.map_or(ActiveValue::NotSet, ActiveValue::Set),
            ..Default::default()
        }
    }
}
