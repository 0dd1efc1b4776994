// tests/list_helper_tests.rs

use bloglist::models::blog::Blog;
use bloglist::utils::list_helper::{
    AuthorBlogCount, AuthorLikes, favorite_blog, most_liked_author, most_prolific_author,
    total_likes,
};

fn blog(id: i64, title: &str, author: &str, likes: i64) -> Blog {
    Blog {
        id,
        title: title.to_string(),
        author: Some(author.to_string()),
        url: format!("https://example.com/{}", id),
        likes,
        user: None,
    }
}

fn blogs() -> Vec<Blog> {
    vec![
        blog(1, "React patterns", "Michael Chan", 7),
        blog(2, "Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
        blog(3, "Canonical string reduction", "Edsger W. Dijkstra", 12),
        blog(4, "First class tests", "Robert C. Martin", 10),
        blog(5, "TDD harms architecture", "Robert C. Martin", 0),
        blog(6, "Type wars", "Robert C. Martin", 2),
    ]
}

#[test]
fn total_likes_of_empty_list_is_zero() {
    let none: Vec<Blog> = Vec::new();
    assert_eq!(total_likes(&none), 0);
}

#[test]
fn total_likes_sums_every_blog() {
    let two = [blog(1, "a", "A", 5), blog(2, "b", "B", 3)];
    assert_eq!(total_likes(&two), 8);
    assert_eq!(total_likes(&blogs()), 36);
}

#[test]
fn total_likes_saturates_instead_of_overflowing() {
    let huge = [blog(1, "a", "A", i64::MAX), blog(2, "b", "A", i64::MAX)];
    assert_eq!(total_likes(&huge), i64::MAX);

    assert_eq!(
        most_liked_author(&huge),
        Some(AuthorLikes {
            author: Some("A".to_string()),
            total_likes: i64::MAX
        })
    );
}

#[test]
fn favorite_of_empty_list_is_none() {
    assert_eq!(favorite_blog(&[]), None);
}

#[test]
fn favorite_is_the_most_liked_blog() {
    let list = [
        blog(1, "a", "A", 5),
        blog(2, "b", "A", 3),
        blog(3, "c", "B", 9),
        blog(4, "d", "B", 2),
    ];
    assert_eq!(favorite_blog(&list).map(|b| b.id), Some(3));

    let all = blogs();
    assert_eq!(
        favorite_blog(&all).map(|b| b.title.as_str()),
        Some("Canonical string reduction")
    );
}

#[test]
fn favorite_tie_goes_to_first_occurrence() {
    let list = [
        blog(1, "a", "A", 4),
        blog(2, "b", "B", 9),
        blog(3, "c", "C", 9),
    ];
    assert_eq!(favorite_blog(&list).map(|b| b.id), Some(2));
}

#[test]
fn most_prolific_author_of_empty_list_is_none() {
    assert_eq!(most_prolific_author(&[]), None);
}

#[test]
fn most_prolific_author_counts_blogs_per_author() {
    let list = [blog(1, "a", "A", 1), blog(2, "b", "A", 1), blog(3, "c", "B", 1)];
    assert_eq!(
        most_prolific_author(&list),
        Some(AuthorBlogCount {
            author: Some("A".to_string()),
            post_count: 2
        })
    );

    assert_eq!(
        most_prolific_author(&blogs()),
        Some(AuthorBlogCount {
            author: Some("Robert C. Martin".to_string()),
            post_count: 3
        })
    );
}

#[test]
fn most_prolific_author_tie_goes_to_first_seen_author() {
    let list = [
        blog(1, "a", "B", 1),
        blog(2, "b", "A", 1),
        blog(3, "c", "A", 1),
        blog(4, "d", "B", 1),
    ];
    assert_eq!(
        most_prolific_author(&list).and_then(|r| r.author),
        Some("B".to_string())
    );
}

#[test]
fn most_liked_author_of_empty_list_is_none() {
    assert_eq!(most_liked_author(&[]), None);
}

#[test]
fn most_liked_author_sums_likes_per_author() {
    let list = [blog(1, "a", "A", 10), blog(2, "b", "B", 7), blog(3, "c", "A", 5)];
    assert_eq!(
        most_liked_author(&list),
        Some(AuthorLikes {
            author: Some("A".to_string()),
            total_likes: 15
        })
    );

    assert_eq!(
        most_liked_author(&blogs()),
        Some(AuthorLikes {
            author: Some("Edsger W. Dijkstra".to_string()),
            total_likes: 17
        })
    );
}

#[test]
fn most_liked_author_tie_goes_to_first_seen_author() {
    let list = [blog(1, "a", "A", 3), blog(2, "b", "B", 5), blog(3, "c", "A", 2)];
    assert_eq!(
        most_liked_author(&list).and_then(|r| r.author),
        Some("A".to_string())
    );
}

#[test]
fn results_serialize_with_camel_case_keys() {
    let result = most_liked_author(&blogs()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["author"], "Edsger W. Dijkstra");
    assert_eq!(json["totalLikes"], 17);

    let result = most_prolific_author(&blogs()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["postCount"], 3);
}

#[test]
fn blogs_without_author_group_together() {
    let mut anonymous = blog(1, "a", "ignored", 4);
    anonymous.author = None;
    let mut also_anonymous = blog(2, "b", "ignored", 4);
    also_anonymous.author = None;
    let list = [anonymous, also_anonymous, blog(3, "c", "A", 5)];

    assert_eq!(
        most_prolific_author(&list),
        Some(AuthorBlogCount {
            author: None,
            post_count: 2
        })
    );
    assert_eq!(
        most_liked_author(&list),
        Some(AuthorLikes {
            author: None,
            total_likes: 8
        })
    );
}
