use std::time::Duration;

use serde_json::{Map, Value};
use server_common::db::DbConnectConfig;
use sqlx::Connection as _;

use crate::{
    app::{
        error::QueryServiceError,
        filter::{FilterKey, FilterValue},
        rows::rows_to_objects,
        table::{AllowListError, TableAllowList},
    },
    Env,
};

/// The one operation this service exposes: a filtered `SELECT *` against a
/// pre-approved table. Stateless; every call opens its own connection.
pub struct QueryService {
    db_config: DbConnectConfig,
    allow_list: TableAllowList,
}

impl QueryService {
    pub fn new(env: &Env) -> Result<Self, AllowListError> {
        let allow_list = TableAllowList::parse(&env.allowed_tables)?;
        let db_config = DbConnectConfig {
            host: env.postgres_host.clone(),
            port: env.pgport,
            user: env.pguser.clone(),
            password: env.pgpassword.clone(),
            database: env.pgdatabase.clone(),
            require_ssl: env.pg_require_ssl,
            connect_timeout: Duration::from_secs(env.database_connect_timeout),
        };
        Ok(Self {
            db_config,
            allow_list,
        })
    }

    /// Builds and runs `SELECT * FROM <table> [WHERE ...]` with one bound
    /// equality condition per filter and returns the rows as ordered
    /// column→value objects, in database result order.
    pub async fn query_table(
        &self,
        table: &str,
        filters: &[(FilterKey, FilterValue)],
    ) -> Result<Vec<Map<String, Value>>, QueryServiceError> {
        let sql = self.build_statement(table, filters)?;
        let mut query = sqlx::query(&sql);
        for (_, value) in filters {
            query = match value {
                FilterValue::Bool(v) => query.bind(*v),
                FilterValue::Integer(v) => query.bind(*v),
                FilterValue::Number(v) => query.bind(*v),
                FilterValue::Text(v) => query.bind(v.clone()),
            };
        }

        let mut conn = self.db_config.connect().await?;
        let result = query.fetch_all(&mut conn).await;
        conn.close().await.ok();

        Ok(rows_to_objects(&result?)?)
    }

    /// Trivial connectivity probe backing the health endpoint.
    pub async fn check_connectivity(&self) -> Result<(), QueryServiceError> {
        let mut conn = self.db_config.connect().await?;
        let result = sqlx::query("SELECT 1").fetch_one(&mut conn).await;
        conn.close().await.ok();
        result?;
        Ok(())
    }

    fn build_statement(
        &self,
        table: &str,
        filters: &[(FilterKey, FilterValue)],
    ) -> Result<String, QueryServiceError> {
        let table = self.allow_list.resolve(table)?;
        let mut sql = format!("SELECT * FROM {table}");
        for (i, (key, _)) in filters.iter().enumerate() {
            let clause = if i == 0 { "WHERE" } else { "AND" };
            sql.push_str(&format!(" {clause} {} = ${}", key.column(), i + 1));
        }
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::QueryService;
    use crate::{
        app::{
            error::QueryServiceError,
            filter::{FilterKey, FilterValue},
        },
        Env,
    };

    fn service() -> QueryService {
        let env = Env {
            port: 8080,
            pguser: "postgres".to_string(),
            pgpassword: "postgres".to_string(),
            postgres_host: "127.0.0.1".to_string(),
            pgdatabase: "testdb".to_string(),
            pgport: 5432,
            pg_require_ssl: false,
            database_connect_timeout: 1,
            allowed_tables: "SALDOC,USERS".to_string(),
        };
        QueryService::new(&env).unwrap()
    }

    #[test]
    fn no_filters_selects_everything() {
        let sql = service().build_statement("SALDOC", &[]).unwrap();
        assert_eq!(sql, "SELECT * FROM SALDOC");
    }

    #[test]
    fn each_filter_adds_one_bound_condition() {
        let filters = vec![
            (
                FilterKey::Username,
                FilterValue::Text("alice".to_string()),
            ),
            (FilterKey::Docnum, FilterValue::Integer(77)),
            (FilterKey::Quantity, FilterValue::Number(1.5)),
        ];
        let sql = service().build_statement("SALDOC", &filters).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM SALDOC WHERE USERNAME = $1 AND DOCNUM = $2 AND QUANTITY = $3"
        );
    }

    #[test]
    fn table_lookup_uses_approved_spelling() {
        let sql = service().build_statement("saldoc", &[]).unwrap();
        assert_eq!(sql, "SELECT * FROM SALDOC");
    }

    #[test]
    fn unapproved_table_never_reaches_sql() {
        let err = service()
            .build_statement("PG_SHADOW", &[])
            .unwrap_err();
        assert!(matches!(err, QueryServiceError::UnknownTable(_)));
        assert!(err.is_validation());
    }
}
