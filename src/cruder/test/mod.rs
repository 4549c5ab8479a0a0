use crate::{
    cruder::Cruder,
    error::CruderError,
    model::{
        item::{CreateItem, ItemCruder, UpdateItem},
        user::{CreateUser, UpdateUser, UserCruder},
    },
    page::Page,
};
use sea_orm::{EntityTrait, Statement, Value};
use test_utils::{builder::TestBuilder, factory};

mod create_multi;
mod find_by_like;
mod update_multi;

fn create_item(title: &str, quantity: i32) -> CreateItem {
    CreateItem {
        title: title.to_string(),
        description: Some(format!("About {}", title)),
        quantity,
    }
}

fn create_user(name: &str) -> CreateUser {
    CreateUser {
        name: name.to_string(),
    }
}
