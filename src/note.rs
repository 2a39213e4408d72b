//! Renders the items of an order into a Lunch Money transaction note.
//!
//! Lunch Money limits notes to [MAX_NOTE_LENGTH] characters. A single item is rendered as
//! `(CATEGORY) Title`. Several items are rendered as `Item N: $TOTAL: (CATEGORY): Title`,
//! joined with `; `. When that is too long, the longest titles are shortened step by step
//! until everything fits. When even the item prefixes alone leave no room for titles,
//! titles are dropped and the item list itself is cut off with [ORDERS_TRUNCATED_MARKER].
//!
//! Lengths are counted in characters, not bytes.

use rust_decimal::Decimal;

use crate::amazon::OrderLineItem;

pub const MAX_NOTE_LENGTH: usize = 350;

const ELLIPSIS: &str = "...";
const ITEM_SEPARATOR: &str = "; ";
const DETAIL_SEPARATOR: &str = ": ";
pub const ORDERS_TRUNCATED_MARKER: &str = " (ADDT'L ORDERS TRUNCATED)...";
/// Space every item needs for at least a shortened title
const MIN_DETAIL_PLACEHOLDER: &str = "Descript...";

pub fn transaction_note(items: &[OrderLineItem]) -> String {
    transaction_note_with_max_length(items, MAX_NOTE_LENGTH)
}

pub fn transaction_note_with_max_length(items: &[OrderLineItem], max_length: usize) -> String {
    match items {
        [] => String::new(),
        [item] => single_item_note(item, max_length),
        items => multi_item_note(items, max_length),
    }
}

fn single_item_note(item: &OrderLineItem, max_length: usize) -> String {
    let note = format!("({}) {}", item.category, item.title);
    if char_len(&note) > max_length {
        format!(
            "{}{ELLIPSIS}",
            truncate_chars(&note, max_length.saturating_sub(ELLIPSIS.len() + 1))
        )
    } else {
        note
    }
}

fn multi_item_note(items: &[OrderLineItem], max_length: usize) -> String {
    let fixed: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                "Item {}: ${}: ({})",
                index + 1,
                format_amount(item.item_total),
                item.category
            )
        })
        .collect();
    let mut details: Vec<String> = items.iter().map(|item| item.title.clone()).collect();

    let note = render(&fixed, &details);
    if char_len(&note) <= max_length {
        return note;
    }

    let min_length_with_details =
        char_len(&fixed.join(ITEM_SEPARATOR)) + items.len() * char_len(MIN_DETAIL_PLACEHOLDER);
    if min_length_with_details > max_length {
        return truncated_item_list(&fixed, max_length);
    }

    let mut note_length = char_len(&note);
    while note_length > max_length {
        if !shorten_longest_detail(&mut details) {
            log::debug!("Can't shorten item titles any further, dropping them");
            return truncated_item_list(&fixed, max_length);
        }
        note_length = char_len(&render(&fixed, &details));
    }
    render(&fixed, &details)
}

/// Only the `Item N: $TOTAL: (CATEGORY)` prefixes, cut off to make room for the marker
fn truncated_item_list(fixed: &[String], max_length: usize) -> String {
    let fixed_only = fixed.join(ITEM_SEPARATOR);
    let kept_length = max_length.saturating_sub(char_len(ORDERS_TRUNCATED_MARKER) + 2);
    format!(
        "{}{ORDERS_TRUNCATED_MARKER}",
        truncate_chars(&fixed_only, kept_length)
    )
}

fn render(fixed: &[String], details: &[String]) -> String {
    fixed
        .iter()
        .zip(details)
        .map(|(fixed, detail)| format!("{fixed}{DETAIL_SEPARATOR}{detail}"))
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR)
}

/// One shortening step. The longest detail is cut down to the length of the next shorter one.
/// If all details have the same length, every detail loses one more character instead.
/// Returns false if the step didn't change anything.
fn shorten_longest_detail(details: &mut [String]) -> bool {
    let lengths: Vec<usize> = details.iter().map(|detail| char_len(detail)).collect();
    let Some(longest_length) = lengths.iter().copied().max() else {
        return false;
    };
    let next_shorter_length = lengths
        .iter()
        .copied()
        .filter(|&length| length < longest_length)
        .max();

    match next_shorter_length {
        Some(next_shorter_length) => {
            // Ties go to the first item
            let Some(longest_index) = lengths
                .iter()
                .position(|&length| length == longest_length)
            else {
                return false;
            };
            let shortened = format!(
                "{}{ELLIPSIS}",
                truncate_chars(
                    &details[longest_index],
                    next_shorter_length.saturating_sub(ELLIPSIS.len())
                )
            );
            let changed = shortened != details[longest_index];
            details[longest_index] = shortened;
            changed
        }
        None => {
            let mut changed = false;
            for detail in details.iter_mut() {
                let mut shortened = detail
                    .strip_suffix(ELLIPSIS)
                    .unwrap_or(detail.as_str())
                    .to_string();
                shortened.pop();
                shortened.push_str(ELLIPSIS);
                if shortened != *detail {
                    changed = true;
                    *detail = shortened;
                }
            }
            changed
        }
    }
}

/// Renders like a plain number: no trailing zeros, `10.50` becomes `10.5`
fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
