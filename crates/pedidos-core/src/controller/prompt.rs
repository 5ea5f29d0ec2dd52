//! User notification seam

/// Blocking user interaction.
///
/// In the browser this is `window.alert` / `window.confirm`.
pub trait Prompt {
    /// Show a message and wait for it to be dismissed
    fn alert(&self, message: &str);

    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;
}

impl<P: Prompt + ?Sized> Prompt for std::rc::Rc<P> {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Texts shown to the user
pub mod messages {
    pub const CONFIRM_DELETE: &str = "Tem certeza que deseja deletar este pedido?";

    pub const CREATED: &str = "Pedido criado com sucesso!";
    pub const UPDATED: &str = "Pedido atualizado com sucesso!";
    pub const DELETED: &str = "Pedido deletado com sucesso!";
    pub const DELIVERED: &str = "Pedido marcado como entregue!";

    pub const LOAD_FAILED: &str = "Erro ao carregar pedidos";
    pub const CREATE_FAILED: &str = "Erro ao criar pedido";
    pub const UPDATE_FAILED: &str = "Erro ao atualizar pedido";
    pub const DELETE_FAILED: &str = "Erro ao deletar pedido";
    pub const DELIVER_FAILED: &str = "Erro ao marcar como entregue";

    /// `"<prefix>: <error>"`
    pub fn failure(prefix: &str, error: &impl std::fmt::Display) -> String {
        format!("{}: {}", prefix, error)
    }
}
