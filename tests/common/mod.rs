#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use user_service::infrastructure::persistence::InMemoryUserRepository;
use user_service::prelude::*;

/// Repository double answering every call with a preset outcome.
#[derive(Default)]
pub struct ScriptedUserRepository {
    pub users: Vec<User>,
    pub found: Option<User>,
    pub accept_save: bool,
    pub confirm_delete: bool,
    pub fault: bool,
    pub panic: bool,
    pub saved: Mutex<Vec<User>>,
    pub deleted: Mutex<Vec<i64>>,
}

impl ScriptedUserRepository {
    fn check(&self) -> Result<(), AppError> {
        if self.panic {
            panic!("scripted repository panic");
        }
        if self.fault {
            return Err(AppError::unexpected());
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for ScriptedUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        self.check()?;
        Ok(self.users.clone())
    }

    async fn find_one(&self, _id: i64) -> Result<Option<User>, AppError> {
        self.check()?;
        Ok(self.found.clone())
    }

    async fn save(&self, user: User) -> Result<bool, AppError> {
        self.check()?;
        self.saved.lock().unwrap().push(user);
        Ok(self.accept_save)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        self.deleted.lock().unwrap().push(id);
        Ok(self.confirm_delete)
    }

    async fn count(&self) -> Result<usize, AppError> {
        self.check()?;
        Ok(self.users.len())
    }
}

pub fn ninjas() -> Vec<User> {
    vec![
        User::new(1, "Naruto".to_string(), 10),
        User::new(2, "Sasuke".to_string(), 18),
        User::new(3, "Kakashi".to_string(), 50),
    ]
}

pub fn scripted_state(repo: Arc<ScriptedUserRepository>) -> AppState {
    AppState::new(repo)
}

pub fn in_memory_state(users: Vec<User>) -> AppState {
    AppState::new(Arc::new(InMemoryUserRepository::with_users(users)))
}
