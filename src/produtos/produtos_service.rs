// src/produtos/produtos_service.rs

use std::sync::Arc;

use tracing::{debug, info};

use super::produtos_mapper;
use super::produtos_repository::ProdutoRepository;
use super::produtos_structs::{
    Produto, ProdutoAtualizarRequest, ProdutoResponse, ProdutoSalvarRequest,
};
use crate::shared::shared_erros::ApiErro;

/// Orquestra as operações de Produto: delega ao port de persistência por
/// meio do mapper e sinaliza NaoEncontrado quando uma busca por id falha.
///
/// O port é fornecido na construção; o service não guarda nenhum outro
/// estado e é compartilhado imutável entre as requisições.
pub struct ProdutoService {
    repository: Arc<dyn ProdutoRepository>,
}

impl ProdutoService {
    pub fn novo(repository: Arc<dyn ProdutoRepository>) -> Self {
        Self { repository }
    }

    /// Cria um novo produto e devolve a projeção do registro persistido.
    /// Falhas do armazenamento atravessam sem mascaramento.
    pub async fn criar(&self, request: ProdutoSalvarRequest) -> Result<ProdutoResponse, ApiErro> {
        info!("Iniciando o processo de criação de um novo produto.");
        debug!("Dados de requisição recebidos para salvar produto: {:?}", request);

        let produto = produtos_mapper::to_entity(request);
        let salvo = self.repository.salvar(produto).await?;

        info!("Produto salvo com sucesso no banco de dados. ID gerado: {:?}", salvo.id);
        Ok(produtos_mapper::to_response(salvo))
    }

    /// Busca um produto pelo id; falha com NaoEncontrado quando ausente.
    pub async fn obter_por_id(&self, id: i32) -> Result<ProdutoResponse, ApiErro> {
        let produto = self.buscar_produto_ou_falhar(id).await?;
        Ok(produtos_mapper::to_response(produto))
    }

    /// Atualização parcial: apenas os campos presentes na requisição
    /// sobrescrevem o registro, que é então persistido de novo. Devolve o
    /// estado pós-atualização.
    pub async fn atualizar(
        &self,
        id: i32,
        request: ProdutoAtualizarRequest,
    ) -> Result<ProdutoResponse, ApiErro> {
        info!("Atualizando produto de ID {}.", id);

        let mut produto = self.buscar_produto_ou_falhar(id).await?;
        produtos_mapper::aplicar_atualizacao(request, &mut produto);

        // Se outro chamador removeu a linha entre a leitura acima e esta
        // escrita, o port falha com RowNotFound e a resposta vira 404.
        let salvo = self.repository.salvar(produto).await.map_err(|erro| match erro {
            sqlx::Error::RowNotFound => ApiErro::NaoEncontrado(id),
            outro => ApiErro::Inesperado(outro),
        })?;

        Ok(produtos_mapper::to_response(salvo))
    }

    /// Confirma a existência do produto e o remove. Sem corpo na resposta.
    pub async fn deletar(&self, id: i32) -> Result<(), ApiErro> {
        info!("Deletando produto de ID {}.", id);

        self.buscar_produto_ou_falhar(id).await?;
        self.repository.deletar_por_id(id).await.map_err(|erro| match erro {
            sqlx::Error::RowNotFound => ApiErro::NaoEncontrado(id),
            outro => ApiErro::Inesperado(outro),
        })?;

        info!("Produto de ID {} deletado.", id);
        Ok(())
    }

    /// Passo bruto de busca: devolve Option, nunca sinaliza NaoEncontrado.
    async fn buscar_produto(&self, id: i32) -> Result<Option<Produto>, ApiErro> {
        Ok(self.repository.buscar_por_id(id).await?)
    }

    /// Embrulha a busca bruta e sinaliza NaoEncontrado na ausência. Todas as
    /// operações públicas passam por aqui, exceto a criação.
    async fn buscar_produto_ou_falhar(&self, id: i32) -> Result<Produto, ApiErro> {
        self.buscar_produto(id)
            .await?
            .ok_or(ApiErro::NaoEncontrado(id))
    }
}
