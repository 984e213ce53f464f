use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::Context;
use rankmerge::{Item, SortedList};
use rayon::prelude::*;

/// Read one list of items per input, stdin if there are no inputs.
/// Item indices run across all inputs.
pub(crate) fn read_lists<P: AsRef<Path>>(files: &[P]) -> anyhow::Result<Vec<Vec<Item>>> {
    let mut index = 0;
    let mut lists = Vec::with_capacity(files.len().max(1));

    if files.is_empty() {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        lists.push(parse_lines(&content, &mut index));
        return Ok(lists);
    }

    for file in files {
        let file = file.as_ref();
        let content = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let list = parse_lines(&content, &mut index);
        log::debug!("Read {} items from {}", list.len(), file.display());
        lists.push(list);
    }

    Ok(lists)
}

fn parse_lines(content: &str, index: &mut u32) -> Vec<Item> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let item = Item::parse(line, *index);
            *index += 1;
            item
        })
        .collect()
}

/// Pool all items and split them into `workers` contiguous lists
pub(crate) fn split(lists: Vec<Vec<Item>>, workers: usize) -> Vec<Vec<Item>> {
    let items: Vec<Item> = lists.into_iter().flatten().collect();
    let workers = workers.max(1);
    let size = items.len().div_ceil(workers).max(1);

    let mut result = Vec::with_capacity(workers);
    let mut iter = items.into_iter().peekable();
    while iter.peek().is_some() {
        let chunk: Vec<Item> = iter.by_ref().take(size).collect();
        result.push(chunk);
    }

    result
}

/// Sort each list by rank, each list on its own worker
pub(crate) fn sort_lists(lists: Vec<Vec<Item>>) -> Vec<SortedList<Item>> {
    lists.into_par_iter().map(SortedList::from).collect()
}
