use crate::ast::{Block, Fragment};

/// Folds every maximal run of adjacent list items into one `Block::List`.
pub fn group_lists(fragments: Vec<Fragment>) -> Vec<Block> {
    let mut iter = fragments.into_iter().peekable();
    let mut out = Vec::new();

    while let Some(fragment) = iter.next() {
        if fragment.is_list_item() {
            let mut items = vec![fragment];
            while let Some(next) = iter.next_if(Fragment::is_list_item) {
                items.push(next);
            }
            log::debug!(target: "shx.group", "grouped {} list item(s)", items.len());
            out.push(Block::List { items });
            continue;
        }

        out.push(Block::Fragment(fragment));
    }

    out
}
