use crate::models::{LoginRequest, SignupData, SignupRequest, TokenPair};
use crate::services::api::{api_request, bad_shape, take_data, ApiError, RequestOptions};

/// Login con email y contraseña; devuelve el par de tokens a persistir
pub async fn login(email: &str, password: &str) -> Result<TokenPair, ApiError> {
    log::info!("🔐 Iniciando sesión para: {}", email);

    let body = serde_json::to_value(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
    .map_err(bad_shape)?;

    let result = api_request("/api/auth/login", RequestOptions::post(body)).await?;
    let data = take_data(result)?;
    let tokens: TokenPair = serde_json::from_value(data).map_err(bad_shape)?;

    log::info!("✅ Login exitoso: {}", email);
    Ok(tokens)
}

/// Registro de cuenta nueva (201); el apodo llega anidado en data.user
pub async fn signup(request: &SignupRequest) -> Result<TokenPair, ApiError> {
    log::info!("📝 Registrando cuenta: {}", request.email);

    let body = serde_json::to_value(request).map_err(bad_shape)?;
    let result = api_request("/api/auth/signup", RequestOptions::post(body)).await?;
    let data = take_data(result)?;
    let signup_data: SignupData = serde_json::from_value(data).map_err(bad_shape)?;

    log::info!("✅ Registro exitoso: {}", request.email);
    Ok(signup_data.into())
}
