use super::*;

fn question(id: i64, upvotes: i64, answered: bool) -> QaQuestion {
    QaQuestion {
        id,
        content: format!("q{id}"),
        author_name: String::new(),
        created_at: String::new(),
        upvotes,
        is_answered: answered,
        answers: Vec::new(),
    }
}

#[test]
fn unanswered_questions_come_first_by_votes() {
    let ordered = order_questions(vec![
        question(1, 9, true),
        question(2, 1, false),
        question(3, 5, false),
        question(4, 5, false),
    ]);
    let ids = ordered.iter().map(|q| q.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 4, 2, 1]);
}
