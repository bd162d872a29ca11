// src/produtos/produtos_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entidade persistida na tabela 'produto'.
/// Deriva FromRow para mapeamento direto de resultados de query SQL.
///
/// O 'id' é None até o primeiro salvamento; o banco o gera (coluna SERIAL)
/// e ele não muda mais depois disso. O chamador nunca atribui identidade.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Produto {
    pub id: Option<i32>,
    pub nome: String,
    pub descricao: String,
    pub preco: BigDecimal,
}

/// Corpo da requisição POST /produtos.
///
/// Todos os campos chegam como Option para que campo ausente e campo em
/// branco caiam igualmente na validação (400 apontando o campo), em vez de
/// falharem na desserialização com uma mensagem genérica.
#[derive(Debug, Deserialize)]
pub struct ProdutoSalvarRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub preco: Option<BigDecimal>,
}

/// Corpo da requisição PUT /produtos/{id}: atualização parcial.
/// Apenas os campos presentes sobrescrevem a entidade existente; os
/// ausentes ficam intocados.
#[derive(Debug, Default, Deserialize)]
pub struct ProdutoAtualizarRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub preco: Option<BigDecimal>,
}

/// Projeção de leitura devolvida pela API, serializada para JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProdutoResponse {
    pub id: i32,
    pub nome: String,
    pub descricao: String,
    pub preco: BigDecimal,
}
