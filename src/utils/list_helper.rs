// src/utils/list_helper.rs

//! Summary statistics over an in-memory list of blogs.
//!
//! Only `author` and `likes` are consulted. Every "most" query breaks ties in favour
//! of the earliest element (or earliest-seen author) in input order.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::blog::Blog;

/// Author with the largest number of blogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBlogCount {
    pub author: Option<String>,
    pub post_count: usize,
}

/// Author whose blogs collected the most likes in total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorLikes {
    pub author: Option<String>,
    pub total_likes: i64,
}

/// Sum of likes; 0 for an empty list. Saturates at `i64::MAX`.
pub fn total_likes<'a, I>(blogs: I) -> i64
where
    I: IntoIterator<Item = &'a Blog>,
{
    blogs
        .into_iter()
        .map(|blog| blog.likes)
        .fold(0, i64::saturating_add)
}

/// The blog with the most likes, or `None` for an empty list.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    first_max_by_key(blogs.iter(), |blog| blog.likes)
}

pub fn most_prolific_author(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    let groups = group_by_author(blogs);
    first_max_by_key(groups.into_iter(), |(_, group)| group.len()).map(|(author, group)| {
        AuthorBlogCount {
            author: author.map(str::to_owned),
            post_count: group.len(),
        }
    })
}

pub fn most_liked_author(blogs: &[Blog]) -> Option<AuthorLikes> {
    let totals = group_by_author(blogs)
        .into_iter()
        .map(|(author, group)| (author, total_likes(group)));

    first_max_by_key(totals, |(_, likes)| *likes).map(|(author, total_likes)| AuthorLikes {
        author: author.map(str::to_owned),
        total_likes,
    })
}

/// Groups blogs by author, keeping groups in the order each author first appears.
fn group_by_author(blogs: &[Blog]) -> Vec<(Option<&str>, Vec<&Blog>)> {
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    let mut groups: Vec<(Option<&str>, Vec<&Blog>)> = Vec::new();

    for blog in blogs {
        let author = blog.author.as_deref();
        let slot = *index.entry(author).or_insert_with(|| {
            groups.push((author, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(blog);
    }

    groups
}

/// Like `Iterator::max_by_key`, but the first maximum wins instead of the last.
fn first_max_by_key<T, K, I, F>(items: I, key: F) -> Option<T>
where
    I: Iterator<Item = T>,
    K: Ord,
    F: Fn(&T) -> K,
{
    items.fold(None, |best: Option<(K, T)>, item| {
        let k = key(&item);
        match best {
            Some((best_key, best_item)) if best_key >= k => Some((best_key, best_item)),
            _ => Some((k, item)),
        }
    })
    .map(|(_, item)| item)
}
