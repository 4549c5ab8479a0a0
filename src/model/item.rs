use sea_orm::{ActiveValue, IntoActiveModel};
use serde::Deserialize;

use crate::cruder::Cruder;

/// Record accessor for `item` rows.
pub type ItemCruder<'a> = Cruder<'a, entity::item::Entity, CreateItem, UpdateItem>;

/// Input for creating an item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateItem {
    /// Display title of the item.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Stock quantity.
    pub quantity: i32,
}

/// Partial input for updating or filtering items.
///
/// Only fields that are `Some` are written (or matched on). A description can be replaced
/// but not cleared through this input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
}

impl IntoActiveModel<entity::item::ActiveModel> for CreateItem {
    fn into_active_model(self) -> entity::item::ActiveModel {
        entity::item::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            quantity: ActiveValue::Set(self.quantity),
            ..Default::default()
        }
    }
}

impl IntoActiveModel<entity::item::ActiveModel> for UpdateItem {
    fn into_active_model(self) -> entity::item::ActiveModel {
        entity::item::ActiveModel {
            title: self.title.map_or(ActiveValue::NotSet, ActiveValue::Set),
            description: self
                .description
                .map_or(ActiveValue::NotSet, |description| {
                    ActiveValue::Set(Some(description))
                }),
            quantity: self.quantity.map_or(ActiveValue::NotSet, ActiveValue::Set),
            ..Default::default()
        }
    }
}
