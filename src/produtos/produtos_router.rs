// src/produtos/produtos_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};

use super::produtos_service::ProdutoService;
use super::produtos_structs::{ProdutoAtualizarRequest, ProdutoSalvarRequest};
use super::produtos_validator;
use crate::shared::shared_erros::ApiErro;

// As quatro rotas delegam inteiramente ao service; a tradução uniforme de
// erros acontece no ResponseError de ApiErro, na borda.

/// Rota para cadastrar um novo produto.
///
/// A validação roda antes de qualquer lógica de negócio: o service nunca
/// observa uma requisição inválida. Sucesso responde 201 com a projeção do
/// produto recém-criado, incluindo o id gerado.
#[post("/produtos")]
pub async fn cadastrar_produto(
    service: web::Data<ProdutoService>,
    item: web::Json<ProdutoSalvarRequest>,
) -> Result<HttpResponse, ApiErro> {
    let request = item.into_inner();
    produtos_validator::validar_salvar(&request).map_err(ApiErro::Validacao)?;

    let response = service.criar(request).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Rota para buscar um produto pelo ID. Responde 404 quando não existe.
#[get("/produtos/{id}")]
pub async fn buscar_produto_por_id(
    service: web::Data<ProdutoService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiErro> {
    let response = service.obter_por_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Rota para atualizar parcialmente um produto existente: apenas os campos
/// presentes no corpo sobrescrevem o registro.
#[put("/produtos/{id}")]
pub async fn atualizar_produto(
    service: web::Data<ProdutoService>,
    path: web::Path<i32>,
    item: web::Json<ProdutoAtualizarRequest>,
) -> Result<HttpResponse, ApiErro> {
    let request = item.into_inner();
    produtos_validator::validar_atualizar(&request).map_err(ApiErro::Validacao)?;

    let response = service.atualizar(path.into_inner(), request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Rota para deletar um produto pelo ID. Sucesso responde 204 sem corpo.
#[delete("/produtos/{id}")]
pub async fn deletar_produto(
    service: web::Data<ProdutoService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiErro> {
    service.deletar(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
