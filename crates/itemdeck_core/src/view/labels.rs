//! Literal UI label strings shared by every front end.

/// Main screen button that opens the item list.
pub const OPEN_ITEM_LIST: &str = "Lista Embutida";
/// Item list screen title.
pub const ITEM_LIST_TITLE: &str = "Itens da Lista Embutida:";
/// Filter text field label.
pub const FILTER_INPUT: &str = "Filtrar por nome ou descrição";
/// Filter trigger button.
pub const FILTER_ACTION: &str = "Filtrar";
/// Back navigation button.
pub const BACK_TO_MAIN: &str = "Voltar para Principal";
pub const ROW_ID_PREFIX: &str = "ID: ";
pub const ROW_NAME_PREFIX: &str = "Nome: ";
pub const ROW_DESCRIPTION_PREFIX: &str = "Descrição: ";

/// Formats the message shown when a non-blank query has no hits.
pub fn empty_state_message(query: &str) -> String {
    format!("Nenhum item encontrado para \"{query}\".")
}

#[cfg(test)]
mod tests {
    use super::empty_state_message;

    #[test]
    fn empty_state_quotes_raw_query() {
        assert_eq!(
            empty_state_message(" xyz "),
            "Nenhum item encontrado para \" xyz \"."
        );
    }
}
