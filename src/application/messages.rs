//! User-facing messages carried in the response envelope.

pub const USER_NOT_FOUND: &str = "Usuário não encontrado";
pub const USER_CREATED: &str = "Usuário criado com sucesso";
pub const USER_CREATE_FAILED: &str = "Falha ao criar o usuário";
pub const USER_DELETED: &str = "Usuário excluído com sucesso";
pub const USER_DELETE_FAILED: &str = "Falha ao remover o usuário";
pub const INTERNAL_ERROR: &str = "Erro interno do servidor";
