use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "product_id")]
    pub id: i64,
    pub category: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The one mutation point for a stored product. The id is never touched;
    /// both payload fields are overwritten wholesale.
    pub fn apply_update(self, category: &str, name: &str) -> ActiveModel {
        let mut am: ActiveModel = self.into();
        am.category = Set(category.to_string());
        am.name = Set(name.to_string());
        am
    }
}

pub fn validate_category(c: &str) -> Result<(), errors::ModelError> {
    if c.trim().is_empty() {
        return Err(errors::ModelError::Validation("category must not be blank".into()));
    }
    Ok(())
}

pub fn validate_name(n: &str) -> Result<(), errors::ModelError> {
    if n.trim().is_empty() {
        return Err(errors::ModelError::Validation("name must not be blank".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    #[test]
    fn blank_fields_are_rejected() {
        assert!(validate_category("").is_err());
        assert!(validate_category("   ").is_err());
        assert!(validate_name("\t").is_err());
        assert!(validate_category("tools").is_ok());
        assert!(validate_name("hammer").is_ok());
    }

    #[test]
    fn apply_update_overwrites_fields_and_keeps_id() {
        let m = Model { id: 7, category: "tools".into(), name: "hammer".into() };
        let am = m.apply_update("garden", "rake");
        assert_eq!(am.id, ActiveValue::Unchanged(7));
        assert_eq!(am.category, ActiveValue::Set("garden".into()));
        assert_eq!(am.name, ActiveValue::Set("rake".into()));
    }
}
