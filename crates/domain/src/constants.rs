//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Durable storage keys. Written together on login, cleared together on logout.
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_USERNAME: &str = "username";
pub const SESSION_STORAGE_KEYS: [&str; 3] =
    [STORAGE_KEY_TOKEN, STORAGE_KEY_USER, STORAGE_KEY_USERNAME];

// Secondary identifying header required by the backend next to the bearer token
pub const USERNAME_HEADER: &str = "X-Username";

// Defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5050/api";
pub const DEFAULT_APP_NAME: &str = "Eu Indico";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_STATE_UF: &str = "SP";
pub const REGISTER_REDIRECT_DELAY_MS: u64 = 2000;

// Form limits
pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// User-facing messages, kept in the product's language.
pub mod messages {
    // Login
    pub const LOGIN_FAILED: &str = "Email ou senha incorretos";

    // Register
    pub const REGISTER_SUCCESS: &str = "Cadastro realizado com sucesso! Você pode fazer login agora.";
    pub const REGISTER_FAILED: &str = "Erro ao criar conta";
    pub const REGISTER_TRANSPORT_FAILED: &str = "Erro ao criar conta. Tente novamente.";

    // Profile
    pub const PROFILE_LOAD_FAILED: &str = "Erro ao carregar dados do perfil";
    pub const PROFILE_UPDATED: &str = "Perfil atualizado com sucesso!";
    pub const PROFILE_UPDATE_FAILED: &str = "Erro ao atualizar perfil";

    // Professions catalogue
    pub const PROFESSIONS_LOAD_FAILED: &str = "Erro ao carregar profissões";
    pub const PROFESSION_CREATED: &str = "Profissão cadastrada com sucesso!";
    pub const PROFESSION_CREATE_FAILED: &str = "Erro ao cadastrar profissão";

    // User professions
    pub const MY_PROFESSIONS_LOAD_FAILED: &str = "Erro ao carregar suas profissões";
    pub const PROFESSION_ADDED: &str = "Profissão adicionada com sucesso!";
    pub const PROFESSION_ADD_FAILED: &str = "Erro ao adicionar profissão";

    // Search & reviews
    pub const SELECT_PROFESSION: &str = "Selecione uma profissão!";
    pub const NO_PROFESSIONALS_FOUND: &str = "Nenhum profissional encontrado";
    pub const SEARCH_FAILED: &str = "Erro ao buscar profissionais";
    pub const REVIEW_SENT: &str = "Avaliação enviada com sucesso!";
    pub const REVIEW_FAILED: &str = "Erro ao enviar avaliação";

    // Validation
    pub const NAME_REQUIRED: &str = "Nome é obrigatório";
    pub const NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 2 caracteres";
    pub const EMAIL_REQUIRED: &str = "Email é obrigatório";
    pub const EMAIL_INVALID: &str = "Email inválido";
    pub const PHONE_REQUIRED: &str = "Telefone é obrigatório";
    pub const TAX_ID_REQUIRED: &str = "CPF/CNPJ é obrigatório";
    pub const STATE_REQUIRED: &str = "Estado é obrigatório";
    pub const CITY_REQUIRED: &str = "Selecione uma cidade";
    pub const NEIGHBORHOOD_REQUIRED: &str = "Bairro é obrigatório";
    pub const PASSWORD_REQUIRED: &str = "Senha é obrigatória";
    pub const PASSWORD_TOO_SHORT: &str = "Senha deve ter pelo menos 8 caracteres";
    pub const PASSWORD_CONFIRMATION_REQUIRED: &str = "Confirmação de senha é obrigatória";
    pub const PASSWORDS_DO_NOT_MATCH: &str = "Senhas não conferem";
    pub const PROFESSION_NAME_REQUIRED: &str = "Nome da profissão é obrigatório";
    pub const PROFESSION_REQUIRED: &str = "Selecione uma profissão";
    pub const RATING_REQUIRED: &str = "Selecione uma avaliação de 1 a 5";
}
