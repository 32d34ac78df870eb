//! # Local Recipe Store
//!
//! Persists recipes in SQLite. A recipe row lives in `recipes`; its ordered
//! ingredient and step lists live in `recipe_ingredients` and `recipe_steps`,
//! keyed by `(recipe_id, position)` and removed together with their recipe.
//!
//! The connection is shared behind an async mutex. Every public operation is
//! self-contained: it takes the lock, does its work (inside a transaction when
//! it touches more than one table) and releases it.

mod schema;

use crate::error::StoreError;
use recipe_common::model::recipe::Recipe;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

const RECIPE_COLUMNS: &str = "id, name, description, image_url, likes";

#[derive(Clone)]
pub struct RecipeStore {
    conn: Arc<Mutex<Connection>>,
}

impl RecipeStore {
    /// Opens (or creates) the database file at `path` and makes sure the
    /// tables exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        schema::initialize(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Returns every persisted recipe, ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let conn = self.conn.lock().await;
        let sql = format!("SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY id");
        query_recipes(&conn, &sql, params![])
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, StoreError> {
        let conn = self.conn.lock().await;
        let sql = format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1");

        let recipe = conn
            .query_row(&sql, params![id], recipe_from_row)
            .optional()?;

        match recipe {
            Some(mut recipe) => {
                load_collections(&conn, &mut recipe)?;
                Ok(Some(recipe))
            }
            None => Ok(None),
        }
    }

    /// Inserts the recipe when it has no id, otherwise updates it in place.
    ///
    /// An explicit id that is not stored yet is inserted under that id. The
    /// ingredient and step lists are replaced wholesale. Returns the stored
    /// record with its id populated.
    pub async fn save(&self, recipe: &Recipe) -> Result<Recipe, StoreError> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let id = match recipe.id {
            Some(id) => {
                tx.execute(
                    "INSERT INTO recipes (id, name, description, image_url, likes)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        description = excluded.description,
                        image_url = excluded.image_url,
                        likes = excluded.likes",
                    params![
                        id,
                        &recipe.name,
                        &recipe.description,
                        &recipe.image_url,
                        &recipe.likes
                    ],
                )?;
                id
            }
            None => {
                tx.execute(
                    "INSERT INTO recipes (name, description, image_url, likes)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        &recipe.name,
                        &recipe.description,
                        &recipe.image_url,
                        &recipe.likes
                    ],
                )?;
                tx.last_insert_rowid()
            }
        };

        replace_list(&tx, "recipe_ingredients", "ingredient", id, &recipe.ingredients)?;
        replace_list(&tx, "recipe_steps", "step", id, &recipe.steps)?;
        tx.commit()?;

        Ok(Recipe {
            id: Some(id),
            ..recipe.clone()
        })
    }

    /// Removes the recipe. Deleting an id that does not exist is a no-op.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        let removed = conn.execute("DELETE FROM recipes WHERE id = ?1", params![id])?;
        if removed == 0 {
            log::debug!("Delete of recipe {id} matched nothing");
        }
        Ok(())
    }

    /// Returns the recipes whose ingredient list contains every one of
    /// `required` as an exact, case-sensitive element.
    ///
    /// Duplicate requirements count once. An empty requirement list matches
    /// every recipe.
    pub async fn search_by_ingredients(
        &self,
        required: &[String],
    ) -> Result<Vec<Recipe>, StoreError> {
        let wanted: BTreeSet<&str> = required.iter().map(String::as_str).collect();
        if wanted.is_empty() {
            return self.find_all().await;
        }

        let placeholders = vec!["?"; wanted.len()].join(", ");
        let sql = format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id IN (
                SELECT recipe_id FROM recipe_ingredients
                WHERE ingredient IN ({placeholders})
                GROUP BY recipe_id
                HAVING COUNT(DISTINCT ingredient) = {}
             ) ORDER BY id",
            wanted.len()
        );

        let conn = self.conn.lock().await;
        query_recipes(&conn, &sql, params_from_iter(wanted.iter()))
    }
}

fn recipe_from_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        description: row.get(2)?,
        image_url: row.get(3)?,
        ingredients: Vec::new(),
        steps: Vec::new(),
        likes: row.get(4)?,
    })
}

fn query_recipes<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<Recipe>, StoreError> {
    let mut stmt = conn.prepare(sql)?;
    let mut recipes = stmt
        .query_map(params, recipe_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    for recipe in &mut recipes {
        load_collections(conn, recipe)?;
    }
    Ok(recipes)
}

fn load_collections(conn: &Connection, recipe: &mut Recipe) -> Result<(), StoreError> {
    let Some(id) = recipe.id else {
        return Ok(());
    };
    recipe.ingredients = load_list(conn, "recipe_ingredients", "ingredient", id)?;
    recipe.steps = load_list(conn, "recipe_steps", "step", id)?;
    Ok(())
}

fn load_list(
    conn: &Connection,
    table: &str,
    column: &str,
    recipe_id: i64,
) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {column} FROM {table} WHERE recipe_id = ?1 ORDER BY position"
    ))?;
    let items = stmt
        .query_map(params![recipe_id], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(items)
}

fn replace_list(
    conn: &Connection,
    table: &str,
    column: &str,
    recipe_id: i64,
    items: &[String],
) -> Result<(), StoreError> {
    conn.execute(
        &format!("DELETE FROM {table} WHERE recipe_id = ?1"),
        params![recipe_id],
    )?;

    let mut insert = conn.prepare_cached(&format!(
        "INSERT INTO {table} (recipe_id, position, {column}) VALUES (?1, ?2, ?3)"
    ))?;
    for (position, item) in items.iter().enumerate() {
        insert.execute(params![recipe_id, position as i64, item])?;
    }
    Ok(())
}
