use super::*;

const EMBED_CLASSES: &[&str] = &[
  "is-provider-twitter",
  "twitter-tweet",
  "wp-block-embed-twitter",
];

pub(crate) struct TweetMatcher;

impl Matcher for TweetMatcher {
  /// Embed codes link mentioned and quoted tweets before the embedded one,
  /// so the last status link wins.
  fn build(&self, markup: &str) -> Option<Component> {
    let markup = markup.trim();

    if re::TWEET_URL.is_match(markup) {
      return Some(Component::Tweet(Embed {
        url: markup.to_string(),
      }));
    }

    let document = dom_query::Document::from(markup);

    candidate_urls(&document)
      .into_iter()
      .rev()
      .find(|candidate| re::TWEET_URL.is_match(candidate))
      .map(|url| Component::Tweet(Embed { url }))
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    has_any_class(node, EMBED_CLASSES)
      || wraps_only(node, |descendant| {
        tag_name(descendant) == "blockquote"
          && descendant.has_class("twitter-tweet")
      })
      || bare_url(node).is_some_and(|url| re::TWEET_URL.is_match(&url))
  }

  fn name(&self) -> &'static str {
    "tweet"
  }
}

#[cfg(test)]
mod tests {
  use {super::*, indoc::indoc, pretty_assertions::assert_eq, serde_json::json};

  #[test]
  fn builds_from_embed_code_using_status_link() {
    let markup = indoc! {r#"
      <blockquote class="twitter-tweet" lang="en">
        <p lang="en" dir="ltr">Swift will be open source later this year. <a href="https://twitter.com/hashtag/WWDC15">#WWDC15</a></p>
        &mdash; Apple (@Apple) <a href="https://twitter.com/Apple/status/608311967158042624">June 8, 2015</a>
      </blockquote>
    "#};

    assert_eq!(
      serde_json::to_value(TweetMatcher.build(markup).unwrap()).unwrap(),
      json!({
        "role": "tweet",
        "URL": "https://twitter.com/Apple/status/608311967158042624",
      })
    );
  }

  #[test]
  fn quoted_status_links_lose_to_the_last_one() {
    let markup = indoc! {r#"
      <blockquote class="twitter-tweet">
        <p>Replying to <a href="https://twitter.com/other/status/1">this</a></p>
        <a href="https://twitter.com/author/status/2">Date</a>
      </blockquote>
    "#};

    assert_eq!(
      TweetMatcher.build(markup),
      Some(Component::Tweet(Embed {
        url: "https://twitter.com/author/status/2".into(),
      }))
    );
  }

  #[test]
  fn builds_from_bare_url() {
    assert_eq!(
      TweetMatcher.build(" https://x.com/jack/status/20 "),
      Some(Component::Tweet(Embed {
        url: "https://x.com/jack/status/20".into(),
      }))
    );
  }

  #[test]
  fn matches_wrappers_and_bare_links() {
    let document = dom_query::Document::from(indoc! {r#"
      <figure class="wp-block-embed is-provider-twitter"><div class="wp-block-embed__wrapper">https://twitter.com/a/status/1</div></figure>
      <p>https://twitter.com/a/status/1</p>
      <p>https://twitter.com/a</p>
    "#});

    let nodes = document.select("body > *").nodes().to_vec();

    assert!(TweetMatcher.matches(&nodes[0]));
    assert!(TweetMatcher.matches(&nodes[1]));
    assert!(!TweetMatcher.matches(&nodes[2]));
  }

  #[test]
  fn wrappers_with_prose_are_not_claimed() {
    let document = dom_query::Document::from(indoc! {r#"
      <div><blockquote class="twitter-tweet"><a href="https://twitter.com/a/status/1">Date</a></blockquote></div>
      <div><p>Intro</p><blockquote class="twitter-tweet"><a href="https://twitter.com/a/status/1">Date</a></blockquote></div>
    "#});

    let nodes = document.select("body > *").nodes().to_vec();

    assert!(TweetMatcher.matches(&nodes[0]));
    assert!(!TweetMatcher.matches(&nodes[1]));
  }
}
