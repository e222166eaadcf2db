use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new(concat!("^", $pat, "$")).unwrap())
  };
}

pub(crate) static CAPTION_SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?s)\[caption(?P<attrs>[^\]]*)\](?P<inner>.*?)\[/caption\]")
    .unwrap()
});

pub(crate) static CAPTIONED_IMAGE: LazyLock<Regex> = re!(
  r"(?s)\s*(?P<image>(?:<a\b[^>]*>\s*)?<img\b[^>]*>(?:\s*</a>)?)(?P<text>.*)"
);

pub(crate) static EMBED_SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?s)\[embed[^\]]*\](?P<url>.*?)\[/embed\]").unwrap()
});

pub(crate) static FACEBOOK_URL: LazyLock<Regex> = re!(concat!(
  r"https?://(?:www\.|m\.)?facebook\.com/(?:[^/?#\s]+/(?:posts|activity|videos)/\d+|",
  r"photo\.php\?fbid=\d+|photos/\d+|permalink\.php\?story_fbid=\d+)\S*"
));

pub(crate) static GALLERY_SHORTCODE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\[gallery(?P<attrs>[^\]]*)\]").unwrap());

pub(crate) static IMAGE_SIZE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)-(?:\d+x\d+|scaled|rotated)(?P<ext>\.[a-z0-9]+)$").unwrap()
});

pub(crate) static INSTAGRAM_URL: LazyLock<Regex> = re!(
  r"(?P<url>https?://(?:www\.)?(?:instagram\.com|instagr\.am)/(?:p|reel|tv)/[\w-]+/?)\S*"
);

pub(crate) static SHORTCODE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r#"(?P<name>[\w-]+)\s*=\s*(?:"(?P<double>[^"]*)"|'(?P<single>[^']*)'|(?P<bare>[^\s"']+))"#,
  )
  .unwrap()
});

pub(crate) static TAG: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

pub(crate) static TWEET_URL: LazyLock<Regex> = re!(
  r"https?://(?:www\.|mobile\.)?(?:twitter|x)\.com/\w+/status(?:es)?/\d+\S*"
);

pub(crate) static VIMEO_URL: LazyLock<Regex> =
  re!(r"https?://(?:www\.|player\.)?vimeo\.com/(?:video/)?(?P<id>\d+)\S*");

pub(crate) static YOUTUBE_URL: LazyLock<Regex> = re!(concat!(
  r"https?://(?:www\.|m\.)?(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:\S*&)?v=|embed/|shorts/)|",
  r"youtu\.be/)(?P<id>[\w-]{11})\S*"
));
