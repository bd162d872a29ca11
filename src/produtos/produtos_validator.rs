// src/produtos/produtos_validator.rs

use bigdecimal::BigDecimal;

use super::produtos_structs::{ProdutoAtualizarRequest, ProdutoSalvarRequest};
use crate::shared::shared_erros::CampoInvalido;

pub const MSG_CAMPO_OBRIGATORIO: &str = "O campo é obrigatório";
pub const MSG_CAMPO_POSITIVO: &str = "O campo deve ser positivo";

/// Valida a requisição de criação: 'nome' e 'descricao' presentes e não em
/// branco, 'preco' presente e estritamente maior que zero.
///
/// Todas as violações são coletadas campo a campo; a verificação nunca para
/// na primeira falha. Um conjunto não vazio rejeita a requisição antes de
/// ela alcançar o service.
pub fn validar_salvar(request: &ProdutoSalvarRequest) -> Result<(), Vec<CampoInvalido>> {
    let mut violacoes = Vec::new();

    validar_texto_obrigatorio("nome", request.nome.as_deref(), &mut violacoes);
    validar_texto_obrigatorio("descricao", request.descricao.as_deref(), &mut violacoes);
    match &request.preco {
        None => violacoes.push(CampoInvalido::novo("preco", MSG_CAMPO_OBRIGATORIO)),
        Some(preco) => validar_preco_positivo(preco, &mut violacoes),
    }

    if violacoes.is_empty() {
        Ok(())
    } else {
        Err(violacoes)
    }
}

/// Valida a requisição de atualização parcial: cada campo só é verificado
/// quando fornecido, mas um campo fornecido deve satisfazer a mesma
/// restrição da criação.
pub fn validar_atualizar(request: &ProdutoAtualizarRequest) -> Result<(), Vec<CampoInvalido>> {
    let mut violacoes = Vec::new();

    if let Some(nome) = request.nome.as_deref() {
        validar_texto_obrigatorio("nome", Some(nome), &mut violacoes);
    }
    if let Some(descricao) = request.descricao.as_deref() {
        validar_texto_obrigatorio("descricao", Some(descricao), &mut violacoes);
    }
    if let Some(preco) = &request.preco {
        validar_preco_positivo(preco, &mut violacoes);
    }

    if violacoes.is_empty() {
        Ok(())
    } else {
        Err(violacoes)
    }
}

fn validar_texto_obrigatorio(campo: &str, valor: Option<&str>, violacoes: &mut Vec<CampoInvalido>) {
    match valor {
        Some(texto) if !texto.trim().is_empty() => {}
        _ => violacoes.push(CampoInvalido::novo(campo, MSG_CAMPO_OBRIGATORIO)),
    }
}

fn validar_preco_positivo(preco: &BigDecimal, violacoes: &mut Vec<CampoInvalido>) {
    if *preco <= BigDecimal::from(0) {
        violacoes.push(CampoInvalido::novo("preco", MSG_CAMPO_POSITIVO));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn salvar_request(nome: &str, descricao: &str, preco: &str) -> ProdutoSalvarRequest {
        ProdutoSalvarRequest {
            nome: Some(nome.to_string()),
            descricao: Some(descricao.to_string()),
            preco: Some(BigDecimal::from_str(preco).unwrap()),
        }
    }

    #[test]
    fn requisicao_valida_passa() {
        assert!(validar_salvar(&salvar_request("Caneca", "Caneca de cerâmica", "29.90")).is_ok());
    }

    #[test]
    fn nome_em_branco_e_rejeitado() {
        let request = salvar_request("   ", "Caneca de cerâmica", "29.90");
        let violacoes = validar_salvar(&request).unwrap_err();
        assert_eq!(violacoes, vec![CampoInvalido::novo("nome", MSG_CAMPO_OBRIGATORIO)]);
    }

    #[test]
    fn descricao_ausente_e_rejeitada() {
        let mut request = salvar_request("Caneca", "x", "29.90");
        request.descricao = None;
        let violacoes = validar_salvar(&request).unwrap_err();
        assert_eq!(violacoes, vec![CampoInvalido::novo("descricao", MSG_CAMPO_OBRIGATORIO)]);
    }

    #[test]
    fn preco_ausente_zero_ou_negativo_e_rejeitado() {
        let mut sem_preco = salvar_request("Caneca", "x", "1");
        sem_preco.preco = None;
        assert_eq!(
            validar_salvar(&sem_preco).unwrap_err(),
            vec![CampoInvalido::novo("preco", MSG_CAMPO_OBRIGATORIO)]
        );

        let zero = salvar_request("Caneca", "x", "0");
        assert_eq!(
            validar_salvar(&zero).unwrap_err(),
            vec![CampoInvalido::novo("preco", MSG_CAMPO_POSITIVO)]
        );

        let negativo = salvar_request("Caneca", "x", "-10.5");
        assert_eq!(
            validar_salvar(&negativo).unwrap_err(),
            vec![CampoInvalido::novo("preco", MSG_CAMPO_POSITIVO)]
        );
    }

    #[test]
    fn todas_as_violacoes_sao_coletadas_juntas() {
        let request = ProdutoSalvarRequest {
            nome: Some("".to_string()),
            descricao: None,
            preco: Some(BigDecimal::from(-1)),
        };
        let violacoes = validar_salvar(&request).unwrap_err();
        assert_eq!(
            violacoes,
            vec![
                CampoInvalido::novo("nome", MSG_CAMPO_OBRIGATORIO),
                CampoInvalido::novo("descricao", MSG_CAMPO_OBRIGATORIO),
                CampoInvalido::novo("preco", MSG_CAMPO_POSITIVO),
            ]
        );
    }

    #[test]
    fn atualizacao_vazia_e_valida() {
        assert!(validar_atualizar(&ProdutoAtualizarRequest::default()).is_ok());
    }

    #[test]
    fn campo_fornecido_na_atualizacao_segue_as_mesmas_restricoes() {
        let request = ProdutoAtualizarRequest {
            nome: Some("  ".to_string()),
            descricao: None,
            preco: Some(BigDecimal::from(0)),
        };
        let violacoes = validar_atualizar(&request).unwrap_err();
        assert_eq!(
            violacoes,
            vec![
                CampoInvalido::novo("nome", MSG_CAMPO_OBRIGATORIO),
                CampoInvalido::novo("preco", MSG_CAMPO_POSITIVO),
            ]
        );
    }
}
