//! Quiz sessions driven through the navigator.

use atelier::{Navigator, OptionFeedback, QuizPhase, QuizTarget};
use catalog::Catalog;

fn open_haystacks_quiz(nav: &mut Navigator, catalog: &Catalog) {
    let reward = catalog.find_lesson(102).unwrap().reward.clone();
    nav.open_quiz(QuizTarget::Reward(reward)).unwrap();
}

#[test]
fn test_perfect_run_scores_full_marks() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::for_catalog(&catalog);
    open_haystacks_quiz(&mut nav, &catalog);

    let mut scores = Vec::new();
    while let Some(quiz) = nav.quiz_mut() {
        if quiz.phase() == QuizPhase::ShowResult {
            break;
        }
        let answer = quiz.current_question().unwrap().answer;
        assert!(quiz.select_option(answer));
        scores.push(quiz.score());
        assert!(quiz.advance());
    }

    assert_eq!(scores, vec![1, 2, 3]);
    assert_eq!(nav.quiz().unwrap().percentage(), 100);

    let summary = nav.finish_quiz().unwrap();
    assert_eq!(summary.target_name, "干草堆");
    assert_eq!((summary.score, summary.total, summary.percentage), (3, 3, 100));
    assert!(nav.quiz().is_none());
}

#[test]
fn test_second_pick_is_ignored() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::for_catalog(&catalog);
    open_haystacks_quiz(&mut nav, &catalog);

    let quiz = nav.quiz_mut().unwrap();
    assert!(quiz.select_option(3));
    assert!(!quiz.select_option(1));

    assert_eq!(quiz.selected(), Some(3));
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.option_feedback(3), OptionFeedback::Incorrect);
    assert_eq!(quiz.option_feedback(1), OptionFeedback::RevealedCorrect);
}

#[test]
fn test_reopening_starts_fresh() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::for_catalog(&catalog);
    open_haystacks_quiz(&mut nav, &catalog);

    let quiz = nav.quiz_mut().unwrap();
    quiz.select_option(1);
    quiz.advance();
    nav.close_quiz();

    open_haystacks_quiz(&mut nav, &catalog);
    let quiz = nav.quiz().unwrap();
    assert_eq!(quiz.index(), 0);
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.selected(), None);
}

#[test]
fn test_abandoned_quiz_yields_no_summary() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::for_catalog(&catalog);
    open_haystacks_quiz(&mut nav, &catalog);

    assert!(nav.finish_quiz().is_none());
    nav.close_quiz();
    assert!(nav.finish_quiz().is_none());
}
