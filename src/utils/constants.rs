/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: cadena vacía (mismo origen, el dev server proxya /api/*)
/// - Producción: https://api.noise.nexuslabs.one (via API_BASE_URL env var)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "",
};
