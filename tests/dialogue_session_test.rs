//! Tests for the dialogue session driving full games.

use async_trait::async_trait;
use shiritori::{
    AnalyzedWord, AnalyzerError, Category, DialoguePhase, DialogueSession, DictionaryEntry,
    GamePhase, Intent, KanaAnalyzer, Lexicon, ReplyAction, TurnEngine, WordAnalyzer, speech,
};
use std::sync::Arc;
use std::time::Duration;

/// Analyzer that takes longer than any test timeout.
#[derive(Debug)]
struct SlowAnalyzer;

#[async_trait]
impl WordAnalyzer for SlowAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalyzedWord, AnalyzerError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        KanaAnalyzer::new().analyze(text).await
    }
}

/// Analyzer whose backing resource is gone.
#[derive(Debug)]
struct UnavailableAnalyzer;

#[async_trait]
impl WordAnalyzer for UnavailableAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<AnalyzedWord, AnalyzerError> {
        Err(AnalyzerError::new("tokenizer not loaded"))
    }
}

fn session_with(analyzer: Arc<dyn WordAnalyzer>, timeout: Duration) -> DialogueSession {
    let engine = TurnEngine::new(Arc::new(Lexicon::builtin().unwrap()));
    DialogueSession::new("test_session".to_string(), engine, analyzer, timeout)
}

fn session() -> DialogueSession {
    session_with(Arc::new(KanaAnalyzer::new()), Duration::from_secs(1))
}

fn word(text: &str) -> Intent {
    Intent::ProvideWord(Some(text.to_string()))
}

/// Launches and seeds a game, leaving the chain at ["リンゴ"].
async fn started(mut session: DialogueSession) -> DialogueSession {
    let reply = session.handle(Intent::Launch).await;
    assert_eq!(reply.speech, speech::START_MESSAGE);
    assert_eq!(session.phase(), DialoguePhase::Start);

    let reply = session.handle(word("しりとり")).await;
    assert_eq!(reply.speech, "リンゴ");
    assert_eq!(reply.action, ReplyAction::ElicitWord);
    assert_eq!(session.phase(), DialoguePhase::Playing);
    session
}

fn chain(session: &DialogueSession) -> Vec<String> {
    session
        .state()
        .map(|state| state.history().as_slice().to_vec())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_full_exchange() {
    let mut session = started(session()).await;

    let reply = session.handle(word("ごりら")).await;
    assert_eq!(reply.speech, "ラッパ");
    assert_eq!(chain(&session), ["リンゴ", "ゴリラ", "ラッパ"]);

    let reply = session.handle(word("パセリ")).await;
    assert_eq!(reply.speech, "リス");
    assert_eq!(chain(&session).len(), 5);
}

#[tokio::test]
async fn test_rejections_prompt_again_without_changing_chain() {
    let mut session = started(session()).await;

    let reply = session.handle(word("みかん")).await;
    assert_eq!(reply.speech, speech::wrong_starting_sound("ミカン", 'ゴ'));
    assert_eq!(reply.action, ReplyAction::ElicitWord);

    let reply = session.handle(word("りんご")).await;
    assert_eq!(reply.speech, speech::wrong_starting_sound("リンゴ", 'ゴ'));

    let reply = session.handle(word("ごりら らっぱ")).await;
    assert_eq!(reply.speech, speech::not_a_single_noun("ごりら らっぱ"));

    let reply = session.handle(word("碁盤")).await;
    assert_eq!(reply.speech, speech::NO_READING);

    let reply = session.handle(Intent::ProvideWord(None)).await;
    assert_eq!(reply.speech, speech::EMPTY_SLOT);

    assert_eq!(chain(&session), ["リンゴ"]);
    assert_eq!(session.phase(), DialoguePhase::Playing);
}

#[tokio::test]
async fn test_repeated_word_is_reported() {
    let mut session = started(session()).await;
    session.handle(word("ごりら")).await;
    session.handle(word("ぱせり")).await;

    // Chain is now リンゴ ゴリラ ラッパ パセリ リス; ス is next.
    let reply = session.handle(word("すいか")).await;
    assert_eq!(reply.speech, "カラス");

    let reply = session.handle(word("すいか")).await;
    assert_eq!(reply.speech, speech::already_used("スイカ"));
}

#[tokio::test]
async fn test_terminal_sound_ends_session() {
    let mut session = started(session()).await;

    let reply = session.handle(word("ごはん")).await;
    assert_eq!(reply.speech, speech::terminal_loss("ゴハン"));
    assert!(reply.ends_session());
    assert_eq!(session.phase(), DialoguePhase::Ended);
    assert!(session.state().is_none());
}

#[tokio::test]
async fn test_assistant_concedes_when_out_of_words() {
    let mut session = started(session()).await;

    let reply = session.handle(word("ごぢ")).await;
    assert_eq!(reply.speech, speech::SURRENDER_MESSAGE);
    assert_eq!(reply.action, ReplyAction::Tell);
    assert_eq!(session.phase(), DialoguePhase::Ended);
}

#[tokio::test]
async fn test_help_detour_reannounces_last_word() {
    let mut session = started(session()).await;
    session.handle(word("ごりら")).await;

    let reply = session.handle(Intent::Help).await;
    assert_eq!(reply.speech, speech::HELP_MESSAGE);
    assert_eq!(session.phase(), DialoguePhase::Help);
    let paused = session.state().unwrap();
    assert!(paused.awaiting_resume());
    assert_eq!(paused.phase(), GamePhase::Resuming);

    let reply = session.handle(word("らくだ")).await;
    assert_eq!(reply.speech, speech::UNHANDLED);

    let reply = session.handle(Intent::Yes).await;
    assert_eq!(reply.speech, speech::resume("ラッパ"));
    assert_eq!(session.phase(), DialoguePhase::Playing);
    assert!(!session.state().unwrap().awaiting_resume());

    let reply = session.handle(word("ぱせり")).await;
    assert_eq!(reply.speech, "リス");
}

#[tokio::test]
async fn test_stop_then_decline_ends_session() {
    let mut session = started(session()).await;

    session.handle(Intent::Stop).await;
    assert_eq!(session.phase(), DialoguePhase::Help);
    assert!(session.state().unwrap().awaiting_resume());

    let reply = session.handle(Intent::No).await;
    assert_eq!(reply.speech, speech::CANCEL_MESSAGE);
    assert!(reply.ends_session());
    assert_eq!(session.phase(), DialoguePhase::Ended);

    let reply = session.handle(word("ごりら")).await;
    assert!(reply.ends_session());
}

#[tokio::test]
async fn test_cancel_mid_game_ends_session() {
    let mut session = started(session()).await;

    let reply = session.handle(Intent::Cancel).await;
    assert_eq!(reply.speech, speech::CANCEL_MESSAGE);
    assert_eq!(session.phase(), DialoguePhase::Ended);
    assert!(session.state().is_none());
}

#[tokio::test]
async fn test_start_over_from_help_resets_chain() {
    let mut session = started(session()).await;
    session.handle(word("ごりら")).await;
    session.handle(Intent::Help).await;

    let reply = session.handle(Intent::StartOver).await;
    assert_eq!(reply.speech, speech::START_MESSAGE);
    assert!(session.state().is_none());

    let reply = session.handle(word("しりとり")).await;
    assert_eq!(reply.speech, "リンゴ");
    assert_eq!(chain(&session), ["リンゴ"]);
}

#[tokio::test]
async fn test_unrecognized_intent_keeps_phase() {
    let mut session = started(session()).await;

    let reply = session.handle(Intent::Unrecognized).await;
    assert_eq!(reply.speech, speech::UNHANDLED);
    assert_eq!(reply.action, ReplyAction::Ask);
    assert_eq!(session.phase(), DialoguePhase::Playing);
}

#[tokio::test]
async fn test_dictionary_entries_drive_analysis() {
    let analyzer = KanaAnalyzer::with_entries(vec![DictionaryEntry::new(
        "胡麻".to_string(),
        Some("ごま".to_string()),
        Category::Noun,
    )]);
    let mut session = started(session_with(Arc::new(analyzer), Duration::from_secs(1))).await;

    let reply = session.handle(word("胡麻")).await;
    assert_eq!(reply.speech, "マクラ");
    assert_eq!(chain(&session), ["リンゴ", "ゴマ", "マクラ"]);
}

#[tokio::test]
async fn test_analyzer_failure_is_not_blamed_on_player() {
    let mut session =
        started(session_with(Arc::new(UnavailableAnalyzer), Duration::from_secs(1))).await;

    let reply = session.handle(word("ごりら")).await;
    assert_eq!(reply.speech, speech::TRY_ANOTHER_WORD);
    assert_eq!(reply.action, ReplyAction::ElicitWord);
    assert_eq!(session.phase(), DialoguePhase::Playing);
    assert_eq!(chain(&session), ["リンゴ"]);
}

#[tokio::test]
async fn test_analyzer_timeout_aborts_turn() {
    let mut session =
        started(session_with(Arc::new(SlowAnalyzer), Duration::from_millis(20))).await;

    let reply = session.handle(word("ごりら")).await;
    assert_eq!(reply.speech, speech::TRY_ANOTHER_WORD);
    assert_eq!(chain(&session), ["リンゴ"]);
}

#[tokio::test]
async fn test_dropped_turn_discards_pending_analysis() {
    let mut session = started(session_with(Arc::new(SlowAnalyzer), Duration::from_secs(10))).await;

    let pending = tokio::time::timeout(Duration::from_millis(20), session.handle(word("ごりら"))).await;
    assert!(pending.is_err());
    assert_eq!(chain(&session), ["リンゴ"]);

    let reply = session.handle(Intent::Cancel).await;
    assert!(reply.ends_session());
    assert_eq!(session.phase(), DialoguePhase::Ended);
}

#[tokio::test]
async fn test_non_noun_from_dictionary_is_rejected() {
    let analyzer = KanaAnalyzer::with_entries(vec![DictionaryEntry::new(
        "ごねる".to_string(),
        Some("ゴネル".to_string()),
        Category::Verb,
    )]);
    let mut session = started(session_with(Arc::new(analyzer), Duration::from_secs(1))).await;

    let reply = session.handle(word("ごねる")).await;
    assert_eq!(reply.speech, speech::not_a_single_noun("ごねる"));
    assert_eq!(chain(&session), ["リンゴ"]);
}
