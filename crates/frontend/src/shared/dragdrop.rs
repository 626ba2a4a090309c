//! Estado de drag-and-drop sobre eventos HTML5.
//!
//! Par de sinais genérico: o que está sendo arrastado e o alvo atual sob o
//! cursor. A view liga `dragstart`/`dragover`/`drop`/`dragend` aos métodos
//! daqui e despacha o par (payload, alvo) para o view model no drop.
//!
//! Enquanto houver um payload ativo a view desabilita novos dragstarts, o
//! que mantém uma única mutação de arraste em voo por vez.

use leptos::prelude::*;

/// Sinais de uma interação de arraste.
#[derive(Debug)]
pub struct DndState<P, A>
where
    P: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    pub arrastando: RwSignal<Option<P>>,
    pub alvo: RwSignal<Option<A>>,
}

impl<P, A> Clone for DndState<P, A>
where
    P: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, A> Copy for DndState<P, A>
where
    P: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
}

impl<P, A> DndState<P, A>
where
    P: Clone + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            arrastando: RwSignal::new(None),
            alvo: RwSignal::new(None),
        }
    }

    /// Começa um arraste. Ignorado se já houver um em andamento.
    pub fn iniciar(&self, payload: P) {
        if self.arrastando.get_untracked().is_none() {
            self.arrastando.set(Some(payload));
        }
    }

    pub fn em_andamento(&self) -> bool {
        self.arrastando.get().is_some()
    }

    /// Marca o alvo sob o cursor (handler de `dragover`).
    pub fn marcar_alvo(&self, alvo: A) {
        if self.arrastando.get_untracked().is_some() {
            self.alvo.set(Some(alvo));
        }
    }

    /// Limpa o alvo sem encerrar o arraste (handler de `dragleave`).
    pub fn limpar_alvo(&self) {
        self.alvo.set(None);
    }

    /// Consome o par (payload, alvo) no drop; `None` se o drop aconteceu
    /// fora de um alvo válido. Sempre encerra o arraste.
    pub fn soltar(&self) -> Option<(P, A)> {
        let payload = self.arrastando.get_untracked();
        let alvo = self.alvo.get_untracked();
        self.cancelar();
        match (payload, alvo) {
            (Some(p), Some(a)) => Some((p, a)),
            _ => None,
        }
    }

    /// Encerra o arraste descartando o estado (handler de `dragend`).
    pub fn cancelar(&self) {
        self.arrastando.set(None);
        self.alvo.set(None);
    }
}

impl<P, A> Default for DndState<P, A>
where
    P: Clone + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segundo_dragstart_e_ignorado() {
        let dnd: DndState<u32, u32> = DndState::new();
        dnd.iniciar(1);
        dnd.iniciar(2);
        assert_eq!(dnd.arrastando.get_untracked(), Some(1));
    }

    #[test]
    fn dragleave_limpa_o_alvo_sem_encerrar_o_arraste() {
        let dnd: DndState<u32, u32> = DndState::new();
        dnd.iniciar(1);
        dnd.marcar_alvo(7);
        dnd.limpar_alvo();
        assert!(dnd.alvo.get_untracked().is_none());
        assert!(dnd.em_andamento());

        // de volta sobre um alvo, o drop ainda entrega o par
        dnd.marcar_alvo(9);
        assert_eq!(dnd.soltar(), Some((1, 9)));
    }

    #[test]
    fn soltar_fora_de_alvo_encerra_sem_par() {
        let dnd: DndState<u32, u32> = DndState::new();
        dnd.iniciar(1);
        assert_eq!(dnd.soltar(), None);
        assert!(!dnd.em_andamento());
    }

    #[test]
    fn alvo_sem_arraste_ativo_e_ignorado() {
        let dnd: DndState<u32, u32> = DndState::new();
        dnd.marcar_alvo(7);
        assert!(dnd.alvo.get_untracked().is_none());
    }
}
