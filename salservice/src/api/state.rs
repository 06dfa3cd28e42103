use crate::{
    app::{query_service::QueryService, table::AllowListError},
    Env,
};

pub struct State {
    pub query_service: QueryService,
}

impl State {
    pub fn new(env: &Env) -> Result<Self, AllowListError> {
        Ok(State {
            query_service: QueryService::new(env)?,
        })
    }
}
