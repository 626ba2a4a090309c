//! Construção de URLs da API.
//!
//! O backend REST roda no mesmo host da aplicação, em porta fixa; a base é
//! derivada de `window.location` a cada chamada (não há arquivo de
//! configuração no cliente).

/// Porta do backend REST.
const PORTA_API: u16 = 3000;

/// Base das URLs da API, derivada da localização atual.
///
/// Retorna string vazia quando não há `window` (fora do browser).
pub fn api_base() -> String {
    let location = match web_sys::window() {
        Some(w) => w.location(),
        None => return String::new(),
    };
    let protocolo = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocolo, host, PORTA_API)
}

/// URL completa da API a partir de um caminho iniciado em "/api/".
pub fn api_url(caminho: &str) -> String {
    format!("{}{}", api_base(), caminho)
}
