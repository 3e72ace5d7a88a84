pub mod client;
pub mod friends;
pub mod generator;

pub use client::{ParseClient, ParseError};
pub use friends::{Analysis, Friends, FriendsError};
pub use generator::{generate, DependencyIndex, Extraction, Role};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use friends_protocol::{Chunk, ChunkId, Morpheme, ParseResult, PartOfSpeech};
    use proptest::prelude::*;

    fn noun(s: &str) -> Morpheme {
        Morpheme::new(s, PartOfSpeech::Noun)
    }

    fn particle(s: &str) -> Morpheme {
        Morpheme::new(s, PartOfSpeech::Particle)
    }

    fn aux(s: &str) -> Morpheme {
        Morpheme::new(s, PartOfSpeech::AuxiliaryVerb)
    }

    fn anchor(id: u32) -> Chunk {
        Chunk::new(id, None, vec![noun("得意"), aux("です")])
    }

    /// 僕は料理が得意です
    fn boku_cooking() -> ParseResult {
        ParseResult::new(vec![
            Chunk::new(0, Some(2), vec![noun("僕"), particle("は")]),
            Chunk::new(1, Some(2), vec![noun("料理"), particle("が")]),
            anchor(2),
        ])
    }

    #[test]
    fn test_end_to_end_sentence() {
        assert_eq!(
            generate(&boku_cooking()).as_deref(),
            Some("すごーい！きみは料理が得意なフレンズなんだね！")
        );
    }

    #[test]
    fn test_empty_parse() {
        assert_eq!(generate(&ParseResult::default()), None);
    }

    #[test]
    fn test_no_anchor() {
        let parse = ParseResult::new(vec![
            Chunk::new(0, Some(2), vec![noun("僕"), particle("は")]),
            Chunk::new(1, Some(2), vec![noun("料理"), particle("が")]),
            Chunk::new(2, None, vec![noun("好き"), aux("です")]),
        ]);
        assert_eq!(generate(&parse), None);
    }

    #[test]
    fn test_anchor_must_be_noun() {
        let parse = ParseResult::new(vec![
            Chunk::new(0, Some(1), vec![noun("料理"), particle("が")]),
            Chunk::new(1, None, vec![Morpheme::new("得意", PartOfSpeech::Adjective)]),
        ]);
        assert_eq!(generate(&parse), None);
    }

    #[test]
    fn test_anchor_without_dependents() {
        let parse = ParseResult::new(vec![anchor(0)]);
        assert_eq!(generate(&parse), None);
    }

    #[test]
    fn test_anchor_without_specialty() {
        let parse = ParseResult::new(vec![
            Chunk::new(0, Some(3), vec![noun("僕"), particle("は")]),
            // Bare particle, nothing in front of it
            Chunk::new(1, Some(3), vec![particle("が")]),
            // Right particle surface, wrong tag
            Chunk::new(2, Some(3), vec![noun("料理"), noun("が")]),
            anchor(3),
        ]);
        assert_eq!(generate(&parse), None);
    }

    #[test]
    fn test_other_particles_are_ignored() {
        let parse = ParseResult::new(vec![
            Chunk::new(0, Some(2), vec![noun("僕"), particle("は")]),
            Chunk::new(1, Some(2), vec![noun("料理"), particle("を")]),
            anchor(2),
        ]);
        assert_eq!(generate(&parse), None);
    }

    #[test]
    fn test_later_subject_wins() {
        let parse = ParseResult::new(vec![
            Chunk::new(0, Some(3), vec![noun("花子"), particle("は")]),
            Chunk::new(1, Some(3), vec![noun("太郎"), particle("は")]),
            Chunk::new(2, Some(3), vec![noun("料理"), particle("が")]),
            anchor(3),
        ]);
        assert_eq!(
            generate(&parse).as_deref(),
            Some("すごーい！太郎は料理が得意なフレンズなんだね！")
        );
    }

    #[test]
    fn test_later_specialty_wins_with_mo() {
        let parse = ParseResult::new(vec![
            Chunk::new(0, Some(3), vec![noun("料理"), particle("が")]),
            Chunk::new(1, Some(3), vec![noun("僕ら"), particle("は")]),
            Chunk::new(2, Some(3), vec![noun("木登り"), particle("も")]),
            anchor(3),
        ]);
        assert_eq!(
            generate(&parse).as_deref(),
            Some("すごーい！きみたちは木登りが得意なフレンズなんだね！")
        );
    }

    #[test]
    fn test_first_anchor_wins() {
        // The second 得意 chunk has the only usable dependents
        let parse = ParseResult::new(vec![
            anchor(0),
            Chunk::new(1, Some(2), vec![noun("料理"), particle("が")]),
            anchor(2),
        ]);
        assert_eq!(generate(&parse), None);
    }

    #[test]
    fn test_plural_subject() {
        let parse = ParseResult::new(vec![
            Chunk::new(0, Some(2), vec![noun("僕"), noun("たち"), particle("は")]),
            Chunk::new(1, Some(2), vec![noun("狩り"), particle("が")]),
            anchor(2),
        ]);
        assert_eq!(
            generate(&parse).as_deref(),
            Some("すごーい！きみたちは狩りが得意なフレンズなんだね！")
        );
    }

    #[test]
    fn test_name_passes_through() {
        let parse = ParseResult::new(vec![
            Chunk::new(0, Some(2), vec![noun("太郎"), particle("は")]),
            Chunk::new(1, Some(2), vec![noun("料理"), particle("が")]),
            anchor(2),
        ]);
        assert_eq!(
            generate(&parse).as_deref(),
            Some("すごーい！太郎は料理が得意なフレンズなんだね！")
        );
    }

    #[test]
    fn test_missing_subject_is_direct_address() {
        // 料理が得意です
        let parse = ParseResult::new(vec![
            Chunk::new(0, Some(1), vec![noun("料理"), particle("が")]),
            anchor(1),
        ]);
        assert_eq!(
            generate(&parse).as_deref(),
            Some("すごーい！きみは料理が得意なフレンズなんだね！")
        );
    }

    #[test]
    fn test_multi_morpheme_specialty() {
        let parse = ParseResult::new(vec![
            Chunk::new(0, Some(2), vec![noun("私"), particle("は")]),
            Chunk::new(1, Some(2), vec![noun("お"), noun("絵かき"), particle("が")]),
            anchor(2),
        ]);
        assert_eq!(
            generate(&parse).as_deref(),
            Some("すごーい！きみはお絵かきが得意なフレンズなんだね！")
        );
    }

    #[test]
    fn test_dependency_index_order() {
        let parse = boku_cooking();
        let (index, found) = generator::index_chunks(&parse);

        assert_eq!(found, Some(ChunkId::new(2)));
        let ids: Vec<u32> = index.dependents(ChunkId::new(2)).iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![0, 1]);
        assert!(index.dependents(ChunkId::new(0)).is_empty());
    }

    #[test]
    fn test_classify() {
        let subject = Chunk::new(0, Some(1), vec![noun("僕"), particle("は")]);
        assert_eq!(generator::classify(&subject), Some(Role::Subject("僕".to_string())));

        let bare = Chunk::new(0, Some(1), vec![particle("は")]);
        assert_eq!(generator::classify(&bare), None);

        let empty = Chunk::new(0, Some(1), vec![]);
        assert_eq!(generator::classify(&empty), None);
    }

    // Stub parse service handing out a canned answer
    struct Canned(Result<ParseResult, fn() -> ParseError>);

    #[async_trait]
    impl ParseClient for Canned {
        async fn parse(&self, _text: &str) -> Result<ParseResult, ParseError> {
            match &self.0 {
                Ok(parse) => Ok(parse.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    #[tokio::test]
    async fn test_say_renders_statement() {
        let friends = Friends::new(Canned(Ok(boku_cooking())));
        let said = friends.say("僕は料理が得意です").await.unwrap();
        assert_eq!(said.as_deref(), Some("すごーい！きみは料理が得意なフレンズなんだね！"));
    }

    #[tokio::test]
    async fn test_say_without_pattern_is_not_an_error() {
        let friends = Friends::new(Canned(Ok(ParseResult::default())));
        assert_eq!(friends.say("").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_say_wraps_parse_failure() {
        let friends = Friends::new(Canned(Err(|| ParseError::Status {
            status: 503,
            body: "unavailable".to_string(),
        })));

        let err = friends.say("僕は料理が得意です").await.unwrap_err();
        assert_eq!(err.to_string(), "fail to parse the text");

        let source = std::error::Error::source(&err).expect("parse error kept as source");
        assert_eq!(source.to_string(), "service returned 503: unavailable");
    }

    #[tokio::test]
    async fn test_analyze_keeps_parse() {
        let friends = Friends::new(Canned(Ok(boku_cooking())));
        let analysis = friends.analyze("僕は料理が得意です").await.unwrap();
        assert_eq!(analysis.parse, boku_cooking());
        assert!(analysis.statement.is_some());
    }

    fn arb_morpheme() -> impl Strategy<Value = Morpheme> {
        (
            prop::sample::select(vec!["僕", "料理", "は", "が", "も", "を", "好き", "です", "得意"]),
            prop::sample::select(vec!["名詞", "助詞", "助動詞", "形容詞"]),
        )
            .prop_map(|(surface, pos)| Morpheme::new(surface, pos))
    }

    fn arb_parse() -> impl Strategy<Value = ParseResult> {
        prop::collection::vec(
            (prop::collection::vec(arb_morpheme(), 0..4), prop::option::of(0u32..6)),
            0..6,
        )
        .prop_map(|chunks| {
            ParseResult::new(
                chunks
                    .into_iter()
                    .enumerate()
                    .map(|(i, (morphemes, head))| Chunk::new(i as u32, head, morphemes))
                    .collect(),
            )
        })
    }

    proptest! {
        #[test]
        fn test_generate_is_pure(parse in arb_parse()) {
            prop_assert_eq!(generate(&parse), generate(&parse));
        }

        #[test]
        fn test_no_anchor_noun_never_matches(parse in arb_parse()) {
            let has_anchor = parse
                .chunks
                .iter()
                .flat_map(|c| &c.morphemes)
                .any(|m| m.surface == "得意" && m.is_noun());
            prop_assume!(!has_anchor);
            prop_assert_eq!(generate(&parse), None);
        }

        #[test]
        fn test_statement_keeps_template(parse in arb_parse()) {
            if let Some(statement) = generate(&parse) {
                prop_assert!(statement.starts_with("すごーい！"));
                prop_assert!(statement.ends_with("が得意なフレンズなんだね！"));
            }
        }
    }
}
