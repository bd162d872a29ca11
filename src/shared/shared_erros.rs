// src/shared/shared_erros.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Uma violação de validação de um único campo da requisição.
#[derive(Debug, Clone, PartialEq)]
pub struct CampoInvalido {
    pub campo: String,
    pub mensagem: String,
}

impl CampoInvalido {
    pub fn novo(campo: impl Into<String>, mensagem: impl Into<String>) -> Self {
        Self {
            campo: campo.into(),
            mensagem: mensagem.into(),
        }
    }
}

/// Taxonomia de falhas da API.
///
/// Validacao é detectada antes do service executar e nunca chega a ele;
/// NaoEncontrado é sinalizado pelo service e capturado apenas aqui, na
/// borda; qualquer outra falha (conectividade, restrição do banco) cai em
/// Inesperado e nunca é reexecutada automaticamente.
#[derive(Debug, Error)]
pub enum ApiErro {
    /// Um ou mais campos da requisição violaram suas restrições.
    #[error("{}", mensagem_validacao(.0))]
    Validacao(Vec<CampoInvalido>),

    /// Nenhum Produto existe com o id referenciado.
    #[error("Produto com ID {0} não encontrado.")]
    NaoEncontrado(i32),

    /// Falha não tratada. O detalhe completo vai para o log operacional; o
    /// chamador recebe apenas uma mensagem genérica.
    #[error("Ocorreu um erro inesperado. Por favor, tente novamente mais tarde.")]
    Inesperado(#[from] sqlx::Error),
}

/// Concatena as violações no formato "Campo '<nome>': <mensagem>. ", na
/// ordem em que foram descobertas.
fn mensagem_validacao(violacoes: &[CampoInvalido]) -> String {
    if violacoes.is_empty() {
        return "Erro de validação desconhecido.".to_string();
    }

    let mut mensagem = String::new();
    for violacao in violacoes {
        mensagem.push_str(&format!("Campo '{}': {}. ", violacao.campo, violacao.mensagem));
    }
    mensagem
}

impl ResponseError for ApiErro {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiErro::Validacao(_) => StatusCode::BAD_REQUEST,
            ApiErro::NaoEncontrado(_) => StatusCode::NOT_FOUND,
            ApiErro::Inesperado(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiErro::Validacao(_) => {
                tracing::error!("{}", self);
            }
            ApiErro::Inesperado(causa) => {
                // Registra o erro completo no log para análise interna.
                tracing::error!("Erro inesperado ocorreu: {:?}", causa);
            }
            ApiErro::NaoEncontrado(_) => {}
        }

        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatena_violacoes_na_ordem_de_descoberta() {
        let erro = ApiErro::Validacao(vec![
            CampoInvalido::novo("nome", "O campo é obrigatório"),
            CampoInvalido::novo("preco", "O campo deve ser positivo"),
        ]);

        assert_eq!(
            erro.to_string(),
            "Campo 'nome': O campo é obrigatório. Campo 'preco': O campo deve ser positivo. "
        );
        assert_eq!(erro.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validacao_sem_violacoes_usa_mensagem_generica() {
        let erro = ApiErro::Validacao(vec![]);
        assert_eq!(erro.to_string(), "Erro de validação desconhecido.");
    }

    #[test]
    fn nao_encontrado_cita_o_id() {
        let erro = ApiErro::NaoEncontrado(42);
        assert_eq!(erro.to_string(), "Produto com ID 42 não encontrado.");
        assert_eq!(erro.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn inesperado_nao_expoe_o_detalhe_da_causa() {
        let erro = ApiErro::from(sqlx::Error::PoolClosed);
        assert_eq!(
            erro.to_string(),
            "Ocorreu um erro inesperado. Por favor, tente novamente mais tarde."
        );
        assert_eq!(erro.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
