// src/produtos/produtos_repository.rs

use async_trait::async_trait;
use sqlx::{query, query_as, Pool, Postgres, Row};

use super::produtos_structs::Produto;

/// Port de persistência da tabela 'produto'.
///
/// O núcleo só distingue "presente" de "ausente"; qualquer outra falha do
/// armazenamento atravessa sem interpretação e vira 500 na borda.
#[async_trait]
pub trait ProdutoRepository: Send + Sync {
    /// Persiste a entidade. Sem 'id', insere e devolve a entidade com o id
    /// gerado pelo banco; com 'id', sobrescreve a linha existente e falha
    /// com RowNotFound se ela tiver sido removida por outro chamador.
    async fn salvar(&self, produto: Produto) -> Result<Produto, sqlx::Error>;

    /// Busca uma linha pelo id; None quando não existe.
    async fn buscar_por_id(&self, id: i32) -> Result<Option<Produto>, sqlx::Error>;

    /// Remove a linha pelo id; falha com RowNotFound quando nada foi removido.
    async fn deletar_por_id(&self, id: i32) -> Result<(), sqlx::Error>;
}

/// Implementação PostgreSQL do port, sobre o pool de conexões do sqlx.
pub struct ProdutoRepositoryPostgres {
    pool: Pool<Postgres>,
}

impl ProdutoRepositoryPostgres {
    pub fn novo(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProdutoRepository for ProdutoRepositoryPostgres {
    async fn salvar(&self, produto: Produto) -> Result<Produto, sqlx::Error> {
        match produto.id {
            None => {
                // Primeiro salvamento: o banco gera o id.
                let linha = query(
                    "INSERT INTO produto (nome, descricao, preco) VALUES ($1, $2, $3) RETURNING id",
                )
                .bind(&produto.nome)
                .bind(&produto.descricao)
                .bind(&produto.preco)
                .fetch_one(&self.pool)
                .await?;

                let id: i32 = linha.try_get("id")?;
                Ok(Produto {
                    id: Some(id),
                    ..produto
                })
            }
            Some(id) => {
                // Sobrescrita em um único UPDATE atômico por id. Se a linha
                // foi removida entre a leitura e esta escrita, nenhuma linha
                // é afetada e a operação falha em vez de ressuscitá-la.
                let resultado = query(
                    "UPDATE produto SET nome = $1, descricao = $2, preco = $3 WHERE id = $4",
                )
                .bind(&produto.nome)
                .bind(&produto.descricao)
                .bind(&produto.preco)
                .bind(id)
                .execute(&self.pool)
                .await?;

                if resultado.rows_affected() == 0 {
                    return Err(sqlx::Error::RowNotFound);
                }
                Ok(produto)
            }
        }
    }

    async fn buscar_por_id(&self, id: i32) -> Result<Option<Produto>, sqlx::Error> {
        query_as::<_, Produto>("SELECT id, nome, descricao, preco FROM produto WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn deletar_por_id(&self, id: i32) -> Result<(), sqlx::Error> {
        let resultado = query("DELETE FROM produto WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
