// File: usermgmt-server/src/controllers/users.rs

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Form, Router,
};
use tracing::{info, warn};

use usermgmt_common::models::log::{ACTION_CREATED, ACTION_DELETED, ACTION_EDITED};
use usermgmt_common::models::User;
use usermgmt_common::traits::{LogApi, UserApi};
use usermgmt_core::Error;

use crate::controllers::AppState;
use crate::models::{
    IdQuery, LogListItemViewModel, UserForm, UserFormViewModel, UserListItemViewModel, UserListViewModel,
    UserLogsViewModel,
};
use crate::result::{ActionResult, ApiError};

pub const LIST_PATH: &str = "/users";

pub struct UsersController {
    users: Arc<dyn UserApi>,
    logs: Arc<dyn LogApi>,
}

impl UsersController {
    pub fn new(users: Arc<dyn UserApi>, logs: Arc<dyn LogApi>) -> Self {
        Self { users, logs }
    }

    pub async fn list(&self) -> Result<ActionResult<UserListViewModel>, Error> {
        let users = self.users.list_all().await?;
        Ok(ActionResult::View(UserListViewModel::from_users(&users)))
    }

    pub async fn list_active(&self) -> Result<ActionResult<UserListViewModel>, Error> {
        let users = self.users.filter_by_active(true).await?;
        Ok(ActionResult::View(UserListViewModel::from_users(&users)))
    }

    pub async fn list_non_active(&self) -> Result<ActionResult<UserListViewModel>, Error> {
        let users = self.users.filter_by_active(false).await?;
        Ok(ActionResult::View(UserListViewModel::from_users(&users)))
    }

    pub fn add_form(&self) -> ActionResult<UserFormViewModel> {
        ActionResult::View(UserFormViewModel::default())
    }

    pub async fn add(&self, form: UserForm) -> Result<ActionResult<UserFormViewModel>, Error> {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => return Ok(ActionResult::View(UserFormViewModel::with_errors(form, errors))),
        };

        let user = self.users.create(&valid.into_new_user()).await?;
        let details = format!("Created user {}", user.email);
        self.logs.log_action(&user, ACTION_CREATED, Some(&details)).await?;

        Ok(ActionResult::redirect(LIST_PATH))
    }

    pub async fn view(&self, id: Option<i64>) -> Result<ActionResult<UserLogsViewModel>, Error> {
        let Some(user) = self.find(id).await? else {
            return Ok(ActionResult::NotFound);
        };

        let logs = self.logs.list_by_user(user.id).await?;
        Ok(ActionResult::View(UserLogsViewModel {
            user: UserListItemViewModel::from(&user),
            logs: logs.iter().map(LogListItemViewModel::from).collect(),
        }))
    }

    pub async fn edit_form(&self, id: Option<i64>) -> Result<ActionResult<UserFormViewModel>, Error> {
        Ok(match self.find(id).await? {
            Some(user) => ActionResult::View(UserFormViewModel {
                form: UserForm::from(&user),
                ..Default::default()
            }),
            None => ActionResult::NotFound,
        })
    }

    pub async fn edit(&self, form: UserForm) -> Result<ActionResult<UserFormViewModel>, Error> {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => return Ok(ActionResult::View(UserFormViewModel::with_errors(form, errors))),
        };

        let Some(mut existing) = self.find(form.id).await? else {
            warn!("Edit requested for unknown user id={:?}", form.id);
            return Ok(ActionResult::NotFound);
        };

        valid.apply_to(&mut existing);
        self.users.update(&existing).await?;
        let details = format!("Edited user {}", existing.email);
        self.logs.log_action(&existing, ACTION_EDITED, Some(&details)).await?;

        Ok(ActionResult::redirect(LIST_PATH))
    }

    pub async fn delete(&self, id: Option<i64>) -> Result<ActionResult<()>, Error> {
        let Some(user) = self.find(id).await? else {
            warn!("Delete requested for unknown user id={:?}", id);
            return Ok(ActionResult::NotFound);
        };

        if self.users.delete_if_exists(&user).await? {
            let details = format!("Deleted user {}", user.email);
            self.logs.log_action(&user, ACTION_DELETED, Some(&details)).await?;
            info!("User id={} deleted via web", user.id);
        }

        Ok(ActionResult::redirect(LIST_PATH))
    }

    async fn find(&self, id: Option<i64>) -> Result<Option<User>, Error> {
        match id {
            Some(id) => self.users.get_by_id(id).await,
            None => Ok(None),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list))
        .route("/users/Active", get(list_active))
        .route("/users/NonActive", get(list_non_active))
        .route("/users/AddUser", get(add_form).post(add))
        .route("/users/ViewUser", get(view))
        .route("/users/EditUser", get(edit_form).post(edit))
        .route("/users/DeleteUser", post(delete))
}

async fn list(State(state): State<AppState>) -> Result<ActionResult<UserListViewModel>, ApiError> {
    Ok(state.users.list().await?)
}

async fn list_active(State(state): State<AppState>) -> Result<ActionResult<UserListViewModel>, ApiError> {
    Ok(state.users.list_active().await?)
}

async fn list_non_active(State(state): State<AppState>) -> Result<ActionResult<UserListViewModel>, ApiError> {
    Ok(state.users.list_non_active().await?)
}

async fn add_form(State(state): State<AppState>) -> ActionResult<UserFormViewModel> {
    state.users.add_form()
}

async fn add(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<ActionResult<UserFormViewModel>, ApiError> {
    Ok(state.users.add(form).await?)
}

async fn view(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<ActionResult<UserLogsViewModel>, ApiError> {
    Ok(state.users.view(query.id).await?)
}

async fn edit_form(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<ActionResult<UserFormViewModel>, ApiError> {
    Ok(state.users.edit_form(query.id).await?)
}

async fn edit(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Form(mut form): Form<UserForm>,
) -> Result<ActionResult<UserFormViewModel>, ApiError> {
    // The body id wins; the query string is a fallback for plain links.
    form.id = form.id.or(query.id);
    Ok(state.users.edit(form).await?)
}

async fn delete(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<ActionResult<()>, ApiError> {
    Ok(state.users.delete(query.id).await?)
}
