// src/produtos/produtos_mapper.rs

use super::produtos_structs::{
    Produto, ProdutoAtualizarRequest, ProdutoResponse, ProdutoSalvarRequest,
};

// Traduções puras entre os DTOs da borda e a entidade persistida. Nenhuma
// delas falha: entrada malformada já foi rejeitada pelo validador.

/// Converte a requisição de criação na entidade a persistir.
/// O 'id' fica de fora do mapeamento: quem o atribui é o banco.
pub fn to_entity(request: ProdutoSalvarRequest) -> Produto {
    Produto {
        id: None,
        nome: request.nome.unwrap_or_default(),
        descricao: request.descricao.unwrap_or_default(),
        preco: request.preco.unwrap_or_default(),
    }
}

/// Aplica a atualização parcial sobre a entidade existente: cada campo
/// presente na requisição sobrescreve o correspondente; campo ausente deixa
/// o valor atual intocado.
pub fn aplicar_atualizacao(request: ProdutoAtualizarRequest, produto: &mut Produto) {
    if let Some(nome) = request.nome {
        produto.nome = nome;
    }
    if let Some(descricao) = request.descricao {
        produto.descricao = descricao;
    }
    if let Some(preco) = request.preco {
        produto.preco = preco;
    }
}

/// Projeta a entidade persistida na resposta da API, campo a campo.
/// Só roda depois do salvamento, quando o 'id' já foi atribuído.
pub fn to_response(produto: Produto) -> ProdutoResponse {
    ProdutoResponse {
        id: produto.id.unwrap_or_default(),
        nome: produto.nome,
        descricao: produto.descricao,
        preco: produto.preco,
    }
}
