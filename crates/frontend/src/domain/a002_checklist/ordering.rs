//! Reordenação e transferência de elementos ordenados por `ordem`.
//!
//! Invariante mantida por todas as operações: depois de qualquer mutação,
//! o `ordem` de cada elemento da coleção afetada é igual ao seu índice
//! 0-based, sem buracos nem duplicatas. A renumeração acontece localmente,
//! antes da persistência.

use contracts::domain::a002_checklist::aggregate::{Board, Card, CardId, ItemId};

/// Tipos que carregam o campo `ordem` de exibição.
pub trait Ordenavel {
    fn set_ordem(&mut self, ordem: i32);
}

impl Ordenavel for Board {
    fn set_ordem(&mut self, ordem: i32) {
        self.ordem = ordem;
    }
}

impl Ordenavel for Card {
    fn set_ordem(&mut self, ordem: i32) {
        self.ordem = ordem;
    }
}

/// Move o elemento da posição `de` para `para`, deslocando os vizinhos.
///
/// Índices fora do intervalo são um no-op: um drop em área inválida não
/// pode corromper a lista.
pub fn mover<T>(lista: &mut Vec<T>, de: usize, para: usize) {
    if de == para || de >= lista.len() {
        return;
    }
    let elemento = lista.remove(de);
    let destino = para.min(lista.len());
    lista.insert(destino, elemento);
}

/// Reatribui `ordem` = índice posicional para todos os elementos.
pub fn renumerar<T: Ordenavel>(lista: &mut [T]) {
    for (indice, elemento) in lista.iter_mut().enumerate() {
        elemento.set_ordem(indice as i32);
    }
}

/// Move + renumera em uma chamada; retorna `false` no no-op.
pub fn mover_e_renumerar<T: Ordenavel>(lista: &mut Vec<T>, de: usize, para: usize) -> bool {
    if de == para || de >= lista.len() {
        return false;
    }
    mover(lista, de, para);
    renumerar(lista);
    true
}

/// Transfere um card entre dois boards da lista, renumerando os dois lados.
///
/// A mutação local é atômica: remoção da origem e inserção no destino (com
/// `board_id` atualizado) acontecem na mesma operação, antes de qualquer
/// chamada de rede. Retorna `false` se origem, destino ou card não existem.
pub fn transferir_card(
    boards: &mut [Board],
    card_id: CardId,
    indice_origem: usize,
    indice_destino: usize,
    posicao_destino: usize,
) -> bool {
    if indice_origem == indice_destino
        || indice_origem >= boards.len()
        || indice_destino >= boards.len()
    {
        return false;
    }
    let posicao_origem = match boards[indice_origem]
        .cards
        .iter()
        .position(|c| c.id == card_id)
    {
        Some(p) => p,
        None => return false,
    };

    let mut card = boards[indice_origem].cards.remove(posicao_origem);
    card.board_id = boards[indice_destino].id;

    let destino = &mut boards[indice_destino].cards;
    let posicao = posicao_destino.min(destino.len());
    destino.insert(posicao, card);

    renumerar(&mut boards[indice_origem].cards);
    renumerar(&mut boards[indice_destino].cards);
    true
}

/// Aplica o valor de marcação a um item, devolvendo o valor anterior.
///
/// É a mesma transição nos dois sentidos: o flip otimista a aplica com o
/// valor novo e o rollback a reaplica com o valor devolvido. `None` se o
/// card ou o item não existem; nada é mutado nesse caso.
pub fn aplicar_marcacao(
    boards: &mut [Board],
    card_id: CardId,
    item_id: ItemId,
    valor: bool,
) -> Option<bool> {
    let item = boards
        .iter_mut()
        .flat_map(|b| b.cards.iter_mut())
        .filter(|c| c.id == card_id)
        .flat_map(|c| c.itens.iter_mut())
        .find(|i| i.id == item_id)?;
    let anterior = item.marcado;
    item.marcado = valor;
    Some(anterior)
}

/// Aplica um título a um card, devolvendo o título anterior.
///
/// Mesmo contrato de [`aplicar_marcacao`], para a edição estrutural.
pub fn aplicar_titulo(boards: &mut [Board], card_id: CardId, titulo: &str) -> Option<String> {
    let card = boards
        .iter_mut()
        .flat_map(|b| b.cards.iter_mut())
        .find(|c| c.id == card_id)?;
    let anterior = std::mem::replace(&mut card.titulo, titulo.to_string());
    Some(anterior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_equipe::aggregate::EquipeId;
    use contracts::domain::a002_checklist::aggregate::{BoardId, Item};

    fn card(titulo: &str, board: &Board, ordem: i32) -> Card {
        Card {
            id: CardId::new_v4(),
            titulo: titulo.into(),
            board_id: board.id,
            ordem,
            horario_abertura: None,
            horario_fechamento: None,
            status: Default::default(),
            descricao: None,
            itens: vec![],
        }
    }

    fn board(nome: &str, ordem: i32) -> Board {
        Board {
            id: BoardId::new_v4(),
            nome: nome.into(),
            equipe_id: EquipeId::new_v4(),
            ordem,
            cards: vec![],
        }
    }

    fn com_cards(nome: &str, ordem: i32, titulos: &[&str]) -> Board {
        let mut b = board(nome, ordem);
        b.cards = titulos
            .iter()
            .enumerate()
            .map(|(i, t)| card(t, &b, i as i32))
            .collect();
        b
    }

    fn ordens(boards: &[Board]) -> Vec<i32> {
        boards.iter().map(|b| b.ordem).collect()
    }

    fn nomes(boards: &[Board]) -> Vec<&str> {
        boards.iter().map(|b| b.nome.as_str()).collect()
    }

    #[test]
    fn mover_para_frente_e_para_tras() {
        let mut lista = vec![board("a", 0), board("b", 1), board("c", 2)];
        assert!(mover_e_renumerar(&mut lista, 0, 2));
        assert_eq!(nomes(&lista), vec!["b", "c", "a"]);
        assert_eq!(ordens(&lista), vec![0, 1, 2]);

        assert!(mover_e_renumerar(&mut lista, 2, 0));
        assert_eq!(nomes(&lista), vec!["a", "b", "c"]);
        assert_eq!(ordens(&lista), vec![0, 1, 2]);
    }

    #[test]
    fn mover_mesma_posicao_e_noop() {
        let mut lista = vec![board("a", 0), board("b", 1)];
        assert!(!mover_e_renumerar(&mut lista, 1, 1));
        assert_eq!(nomes(&lista), vec!["a", "b"]);
    }

    #[test]
    fn mover_indice_invalido_e_noop() {
        let mut lista = vec![board("a", 0), board("b", 1)];
        assert!(!mover_e_renumerar(&mut lista, 5, 0));
        assert_eq!(nomes(&lista), vec!["a", "b"]);
    }

    #[test]
    fn renumerar_remove_buracos_e_duplicatas() {
        let mut lista = vec![board("a", 7), board("b", 7), board("c", 42)];
        renumerar(&mut lista);
        assert_eq!(ordens(&lista), vec![0, 1, 2]);
    }

    #[test]
    fn transferir_card_mantem_unicidade() {
        let mut boards = vec![
            com_cards("origem", 0, &["x", "y", "z"]),
            com_cards("destino", 1, &["w"]),
        ];
        let id = boards[0].cards[1].id;

        assert!(transferir_card(&mut boards, id, 0, 1, 0));

        // o card existe em exatamente um board
        let presencas: usize = boards
            .iter()
            .map(|b| b.cards.iter().filter(|c| c.id == id).count())
            .sum();
        assert_eq!(presencas, 1);

        // chegou no destino, na posição pedida, com o dono atualizado
        assert_eq!(boards[1].cards[0].id, id);
        assert_eq!(boards[1].cards[0].board_id, boards[1].id);

        // os dois lados foram renumerados densos
        assert_eq!(
            boards[0].cards.iter().map(|c| c.ordem).collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert_eq!(
            boards[1].cards.iter().map(|c| c.ordem).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn transferir_posicao_alem_do_fim_anexa() {
        let mut boards = vec![
            com_cards("origem", 0, &["x"]),
            com_cards("destino", 1, &["a", "b"]),
        ];
        let id = boards[0].cards[0].id;
        assert!(transferir_card(&mut boards, id, 0, 1, 99));
        assert_eq!(boards[1].cards.last().unwrap().id, id);
    }

    fn item(descricao: &str, ordem: i32, marcado: bool) -> Item {
        Item {
            id: ItemId::new_v4(),
            descricao: descricao.into(),
            ordem,
            marcado,
        }
    }

    #[test]
    fn marcacao_reaplicada_restaura_o_valor_anterior() {
        let mut boards = vec![com_cards("a", 0, &["x"])];
        boards[0].cards[0].itens = vec![item("conferir estoque", 0, false)];
        let card_id = boards[0].cards[0].id;
        let item_id = boards[0].cards[0].itens[0].id;

        // flip otimista
        let anterior = aplicar_marcacao(&mut boards, card_id, item_id, true);
        assert_eq!(anterior, Some(false));
        assert!(boards[0].cards[0].itens[0].marcado);

        // a persistência falhou: reaplicar o valor devolvido desfaz o flip
        aplicar_marcacao(&mut boards, card_id, item_id, anterior.unwrap());
        assert!(!boards[0].cards[0].itens[0].marcado);
    }

    #[test]
    fn marcacao_de_item_desconhecido_nao_muta_nada() {
        let mut boards = vec![com_cards("a", 0, &["x"])];
        boards[0].cards[0].itens = vec![item("conferir estoque", 0, true)];
        let card_id = boards[0].cards[0].id;

        assert_eq!(
            aplicar_marcacao(&mut boards, card_id, ItemId::new_v4(), false),
            None
        );
        assert!(boards[0].cards[0].itens[0].marcado);
    }

    #[test]
    fn titulo_reaplicado_restaura_o_anterior() {
        let mut boards = vec![com_cards("a", 0, &["abertura"])];
        let card_id = boards[0].cards[0].id;

        let anterior = aplicar_titulo(&mut boards, card_id, "fechamento");
        assert_eq!(anterior.as_deref(), Some("abertura"));
        assert_eq!(boards[0].cards[0].titulo, "fechamento");

        aplicar_titulo(&mut boards, card_id, &anterior.unwrap());
        assert_eq!(boards[0].cards[0].titulo, "abertura");

        assert_eq!(aplicar_titulo(&mut boards, CardId::new_v4(), "outro"), None);
    }

    #[test]
    fn transferir_card_inexistente_e_noop() {
        let mut boards = vec![com_cards("origem", 0, &["x"]), com_cards("destino", 1, &[])];
        let alheio = CardId::new_v4();
        assert!(!transferir_card(&mut boards, alheio, 0, 1, 0));
        assert_eq!(boards[0].cards.len(), 1);
        assert!(boards[1].cards.is_empty());
    }
}
