use std::fmt;

use sea_orm::{entity::prelude::*, DatabaseConnection, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub surname: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ID: {}, Name: {}, Surname: {}]", self.id, self.name, self.surname)
    }
}

/// Insert one student inside its own transaction.
///
/// Either the row is committed or nothing is written. The engine enforces
/// primary-key uniqueness; a violation surfaces as `ModelError::Duplicate`.
pub async fn insert(db: &DatabaseConnection, student: Model) -> Result<(), ModelError> {
    let txn = db.begin().await.map_err(ModelError::from_db)?;
    let am = ActiveModel {
        id: Set(student.id),
        name: Set(student.name),
        surname: Set(student.surname),
    };
    if let Err(e) = Entity::insert(am).exec_without_returning(&txn).await {
        if let Err(rollback) = txn.rollback().await {
            warn!(error = %rollback, "rollback after failed insert failed");
        }
        return Err(ModelError::from_db(e));
    }
    txn.commit().await.map_err(ModelError::from_db)
}

/// All rows, in whatever order the engine returns them.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().all(db).await.map_err(ModelError::from_db)
}

pub async fn find(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id.to_string()).one(db).await.map_err(ModelError::from_db)
}
