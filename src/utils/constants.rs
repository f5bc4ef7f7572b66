/// Clave de localStorage donde se persiste el token de autenticación.
/// El token sobrevive al reinicio del proceso; el usuario se vuelve a
/// pedir al backend en cada arranque.
pub const STORAGE_KEY_AUTH_TOKEN: &str = "auth_token";

/// Ruta de entrada al login (redirección forzada tras un 401)
pub const LOGIN_PATH: &str = "/login";

/// Esquema del header de autorización (DRF TokenAuthentication)
pub const AUTH_SCHEME: &str = "Token";
