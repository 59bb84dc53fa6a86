//! Static source data: the feed registry, category keyword table, and
//! district-inference stoplist.
//!
//! These are data, not logic. [`crate::config::PipelineConfig::default`]
//! copies them into an owned configuration value; nothing reads them at
//! runtime otherwise.

/// Every feed ingested on a default run, in processing order.
///
/// Registry order matters: when two feeds carry the same story, the one
/// listed first wins deduplication.
pub const FEEDS: &[&str] = &[
    "https://www.bhaskarenglish.in/rss-v1--category-16346.xml",
    "https://www.yugmarg.com/rssfeed/uttarpradesh-rss.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/rssfeed.xml",
    "https://www.bhaskar.com/rss-v1--category-2052.xml",
    "https://www.amarujala.com/rss/uttar-pradesh.xml",
    "https://www.amarujala.com/rss/gorakhpur.xml",
    "https://www.amarujala.com/rss/lucknow.xml",
    "https://www.amarujala.com/rss/amroha.xml",
    "https://www.amarujala.com/rss/amethi.xml",
    "https://www.amarujala.com/rss/ambedkar-nagar.xml",
    "https://www.amarujala.com/rss/faizabad.xml",
    "https://www.amarujala.com/rss/aligarh.xml",
    "https://www.amarujala.com/rss/agra.xml",
    "https://www.amarujala.com/rss/azamgarh.xml",
    "https://www.amarujala.com/rss/etawah.xml",
    "https://www.amarujala.com/rss/unnao.xml",
    "https://www.amarujala.com/rss/etah.xml",
    "https://www.amarujala.com/rss/auraiya.xml",
    "https://www.amarujala.com/rss/kannauj.xml",
    "https://www.amarujala.com/rss/kanpur.xml",
    "https://www.amarujala.com/rss/kushinagar.xml",
    "https://www.amarujala.com/rss/kaushambi.xml",
    "https://www.amarujala.com/rss/ghazipur.xml",
    "https://www.amarujala.com/rss/gonda.xml",
    "https://www.amarujala.com/rss/ghatampur.xml",
    "https://www.amarujala.com/rss/chandauli.xml",
    "https://www.amarujala.com/rss/chitrakoot.xml",
    "https://www.amarujala.com/rss/jalaun.xml",
    "https://www.amarujala.com/rss/jaunpur.xml",
    "https://www.amarujala.com/rss/jhansi.xml",
    "https://www.amarujala.com/rss/deoria.xml",
    "https://www.amarujala.com/rss/pilibhit.xml",
    "https://www.amarujala.com/rss/pratapgarh.xml",
    "https://www.amarujala.com/rss/allahabad.xml",
    "https://www.amarujala.com/rss/fatehpur.xml",
    "https://www.amarujala.com/rss/farrukhabad.xml",
    "https://www.amarujala.com/rss/firozabad.xml",
    "https://www.amarujala.com/rss/budaun.xml",
    "https://www.amarujala.com/rss/bareilly.xml",
    "https://www.amarujala.com/rss/balrampur.xml",
    "https://www.amarujala.com/rss/ballia.xml",
    "https://www.amarujala.com/rss/basti.xml",
    "https://www.amarujala.com/rss/bahraich.xml",
    "https://www.amarujala.com/rss/banda.xml",
    "https://www.amarujala.com/rss/baghpat.xml",
    "https://www.amarujala.com/rss/barabanki.xml",
    "https://www.amarujala.com/rss/bijnor.xml",
    "https://www.amarujala.com/rss/bulandshahr.xml",
    "https://www.amarujala.com/rss/bhadohi.xml",
    "https://www.amarujala.com/rss/mau.xml",
    "https://www.amarujala.com/rss/mathura.xml",
    "https://www.amarujala.com/rss/maharajganj.xml",
    "https://www.amarujala.com/rss/mahoba.xml",
    "https://www.amarujala.com/rss/mirzapur.xml",
    "https://www.amarujala.com/rss/muzaffarnagar.xml",
    "https://www.amarujala.com/rss/moradabad.xml",
    "https://www.amarujala.com/rss/meerut.xml",
    "https://www.amarujala.com/rss/mainpuri.xml",
    "https://www.amarujala.com/rss/rampur.xml",
    "https://www.amarujala.com/rss/raebareli.xml",
    "https://www.amarujala.com/rss/lakhimpur-kheri.xml",
    "https://www.amarujala.com/rss/lalitpur.xml",
    "https://www.amarujala.com/rss/varanasi.xml",
    "https://www.amarujala.com/rss/shamli.xml",
    "https://www.amarujala.com/rss/shahjahanpur.xml",
    "https://www.amarujala.com/rss/shravasti.xml",
    "https://www.amarujala.com/rss/sant-kabir-nagar.xml",
    "https://www.amarujala.com/rss/sambhal.xml",
    "https://www.amarujala.com/rss/saharanpur.xml",
    "https://www.amarujala.com/rss/siddharthnagar.xml",
    "https://www.amarujala.com/rss/sitapur.xml",
    "https://www.amarujala.com/rss/sultanpur.xml",
    "https://www.amarujala.com/rss/sonbhadra.xml",
    "https://www.amarujala.com/rss/hamirpur.xml",
    "https://www.amarujala.com/rss/hardoi.xml",
    "https://www.amarujala.com/rss/hathras.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/lucknow/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/varanasi/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/bareilly/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/moradabad/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/meerut/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/agra/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/aligarh/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/prayagraj/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/gorakhpur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/kanpur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/barabanki/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/azamgarh/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/balia/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/bhadohi/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/chandauli/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/ghazipur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/jaunpur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/mau/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/mirzapur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/sonbhadra/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/basti/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/kushinagar/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/deoria/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/maharajganj/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/sant-kabir-nagar/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/siddharth-nagar/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/bagpat/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/shamli/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/bijnor/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/bulandshahr/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/hapur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/muzaffarnagar/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/saharanpur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/badaun/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/lakhimpur-kheri/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/pilibhit/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/shahjahanpur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/etah/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/firozabad/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/mainpuri/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/mathura/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/ambedkar-nagar/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/amethi/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/gauriganj/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/shravasti/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/balrampur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/bahraich/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/faizabad/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/gonda/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/raebareli/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/fatehpur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/sitapur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/sultanpur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/auraiya/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/akbarpur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/bilhor/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/lalitpur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/mahoba/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/kanpur-rural/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/chitrakoot/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/banda/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/etawah/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/farrukhabad/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/kannauj/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/hamirpur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/hardoi/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/jhansi/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/orai/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/unnao/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/hathras/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/amroha/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/rampur/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/sambhal/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/gangapar/rssfeed.xml",
    "https://api.livehindustan.com/feeds/rss/uttar-pradesh/kausambi/rssfeed.xml",
    "https://cms.patrika.com/googlefeed/blog/location/uttar-pradesh-news",
    "https://cms.patrika.com/googlefeed/blog/location/agra-news",
    "https://cms.patrika.com/googlefeed/blog/location/firozabad-news",
    "https://cms.patrika.com/googlefeed/blog/location/mainpuri-news",
    "https://cms.patrika.com/googlefeed/blog/location/mathura-news",
    "https://cms.patrika.com/googlefeed/blog/location/aligarh-news",
    "https://cms.patrika.com/googlefeed/blog/location/etah-news",
    "https://cms.patrika.com/googlefeed/blog/location/etawah-news",
    "https://cms.patrika.com/googlefeed/blog/location/hathras-news",
    "https://cms.patrika.com/googlefeed/blog/location/kasganj-news",
    "https://cms.patrika.com/googlefeed/blog/location/kaushambi-news",
    "https://cms.patrika.com/googlefeed/blog/location/prayagraj-news",
    "https://cms.patrika.com/googlefeed/blog/location/fatehpur-news",
    "https://cms.patrika.com/googlefeed/blog/location/pratapgarh-news",
    "https://cms.patrika.com/googlefeed/blog/location/azamgarh-news",
    "https://cms.patrika.com/googlefeed/blog/location/ballia-news",
    "https://cms.patrika.com/googlefeed/blog/location/mau-news",
    "https://cms.patrika.com/googlefeed/blog/location/bareilly-news",
    "https://cms.patrika.com/googlefeed/blog/location/budaun-news",
    "https://cms.patrika.com/googlefeed/blog/location/pilibhit-news",
    "https://cms.patrika.com/googlefeed/blog/location/shahjahanpur-news",
    "https://cms.patrika.com/googlefeed/blog/location/basti-news",
    "https://cms.patrika.com/googlefeed/blog/location/sant-kabir-nagar-news",
    "https://cms.patrika.com/googlefeed/blog/location/sidharthnagar-news",
    "https://cms.patrika.com/googlefeed/blog/location/banda-news",
    "https://cms.patrika.com/googlefeed/blog/location/chitrakoot-news",
    "https://cms.patrika.com/googlefeed/blog/location/hamirpur-news",
    "https://cms.patrika.com/googlefeed/blog/location/mahoba-news",
    "https://cms.patrika.com/googlefeed/blog/location/bahraich-news",
    "https://cms.patrika.com/googlefeed/blog/location/balrampur-news",
    "https://cms.patrika.com/googlefeed/blog/location/gonda-news",
    "https://cms.patrika.com/googlefeed/blog/location/shravasti-news",
    "https://cms.patrika.com/googlefeed/blog/location/ambedkar-nagar-news",
    "https://cms.patrika.com/googlefeed/blog/location/amethi-news",
    "https://cms.patrika.com/googlefeed/blog/location/ayodhya-news",
    "https://cms.patrika.com/googlefeed/blog/location/barabanki-news",
    "https://cms.patrika.com/googlefeed/blog/location/faizabad-news",
    "https://cms.patrika.com/googlefeed/blog/location/sultanpur-news",
    "https://cms.patrika.com/googlefeed/blog/location/deoria-news",
    "https://cms.patrika.com/googlefeed/blog/location/gorakhpur-news",
    "https://cms.patrika.com/googlefeed/blog/location/kushinagar-news",
    "https://cms.patrika.com/googlefeed/blog/location/mahrajganj-news",
    "https://cms.patrika.com/googlefeed/blog/location/jalaun-news",
    "https://cms.patrika.com/googlefeed/blog/location/jhansi-news",
    "https://cms.patrika.com/googlefeed/blog/location/lalitpur-news",
    "https://cms.patrika.com/googlefeed/blog/location/auraiya-news",
    "https://cms.patrika.com/googlefeed/blog/location/farrukhabad-news",
    "https://cms.patrika.com/googlefeed/blog/location/kannauj-news",
    "https://cms.patrika.com/googlefeed/blog/location/kanpur-news",
    "https://cms.patrika.com/googlefeed/blog/location/hardoi-news",
    "https://cms.patrika.com/googlefeed/blog/location/lakhimpur-kheri-news",
    "https://cms.patrika.com/googlefeed/blog/location/lucknow-news",
    "https://cms.patrika.com/googlefeed/blog/location/raebareli-news",
    "https://cms.patrika.com/googlefeed/blog/location/sitapur-news",
    "https://cms.patrika.com/googlefeed/blog/location/unnao-news",
    "https://cms.patrika.com/googlefeed/blog/location/bagpat-news",
    "https://cms.patrika.com/googlefeed/blog/location/bulandshahr-news",
    "https://cms.patrika.com/googlefeed/blog/location/greater-noida-news",
    "https://cms.patrika.com/googlefeed/blog/location/noida-news",
    "https://cms.patrika.com/googlefeed/blog/location/ghaziabad-news",
    "https://cms.patrika.com/googlefeed/blog/location/ghazipur-news",
    "https://cms.patrika.com/googlefeed/blog/location/hapur-news",
    "https://cms.patrika.com/googlefeed/blog/location/meerut-news",
    "https://cms.patrika.com/googlefeed/blog/location/bhadohi-news",
    "https://cms.patrika.com/googlefeed/blog/location/mirzapur-news",
    "https://cms.patrika.com/googlefeed/blog/location/sonbhadra-news",
    "https://cms.patrika.com/googlefeed/blog/location/amroha-news",
    "https://cms.patrika.com/googlefeed/blog/location/bijnor-news",
    "https://cms.patrika.com/googlefeed/blog/location/moradabad-news",
    "https://cms.patrika.com/googlefeed/blog/location/rampur-news",
    "https://cms.patrika.com/googlefeed/blog/location/sambhal-news",
    "https://cms.patrika.com/googlefeed/blog/location/muzaffarnagar-news",
    "https://cms.patrika.com/googlefeed/blog/location/saharanpur-news",
    "https://cms.patrika.com/googlefeed/blog/location/shamli-news",
    "https://cms.patrika.com/googlefeed/blog/location/chandauli-news",
    "https://cms.patrika.com/googlefeed/blog/location/jaunpur-news",
    "https://cms.patrika.com/googlefeed/blog/location/varanasi-news",
    "https://www.amarujala.com/rss/ghaziabad.xml",
];

/// Label for stories that match no category keyword.
pub const UNCATEGORISED: &str = "Uncategorised";

/// Label for stories whose feed URL yields no district.
pub const GENERAL_DISTRICT: &str = "General";

/// Ordered (category, keywords) table. The first category with a matching
/// keyword wins, so declaration order is part of the contract.
///
/// Keywords are matched as lower-cased, unanchored substrings. Short tokens
/// such as `"sp"` and `"inc"` therefore also hit inside unrelated words.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Opposition Activity",
        &[
            "samajwadi",
            "sp",
            "congress",
            "inc",
            "aazad samaj",
            "bsp",
            "aimim",
            "ad(k)",
            "akhilesh",
            "mayawati",
            "azad",
            "owaisi",
            "rahul",
            "gandhi",
            "priyanka",
            "chalisa",
            "aazad samaj party",
            "azad samaj",
            "sp chief",
            "inc leader",
            "up congress",
            " विपक्ष",
            "विपक्ष",
            "सपा",
            "बसपा",
        ],
    ),
    (
        "NDA Activity",
        &[
            "bjp",
            "nda",
            "sbsp",
            "ad(s)",
            "rld",
            "nishad",
            "modi",
            "yogi",
            "pm modi",
            "amit shah",
            "jp nadda",
            "apna dal",
            "nath",
            "भाजपा",
            "योगी",
            "मोदी",
            "आदित्यनाथ",
        ],
    ),
    (
        "Governance issues",
        &[
            "development",
            "infrastructure",
            "scheme",
            "mission",
            "project",
            "programme",
            "program",
            "road",
            "bridge",
            "hospital",
            "demand",
            "protest",
            "demonstration",
            "struggle",
            "complaint",
            "scheme",
            "health",
            "education",
            "school",
            "college",
            "budget",
            "fund",
            "electricity",
            "water",
            "environment",
            "administration",
            "government",
            "policy",
            "minister",
            "district magistrate",
            "commissioner",
            "मुख्यमंत्री",
            "सरकार",
            "विकास",
            "योजना",
        ],
    ),
    (
        "Judicial cases",
        &[
            "court",
            "high court",
            "supreme court",
            "verdict",
            "judgment",
            "judge",
            "petition",
            "litigation",
            "lawsuit",
            "legal",
            "case",
            "mp mla court",
            "decision",
            "hearings",
            "bench",
            "arrest",
            "bail",
            "अदालत",
            "न्यायालय",
        ],
    ),
];

/// Path-segment substrings that never name a district: navigation and
/// feed plumbing tokens plus the state's own name.
pub const DISTRICT_STOPLIST: &[&str] = &[
    "news",
    "state",
    "rss",
    "feed",
    "articlelist",
    "india",
    "uttar-pradesh",
    "uttar_pradesh",
    "uttarpradesh",
    "location",
    "blog",
    "category",
];

/// Explicit feed URL to district mappings, checked before path inference.
pub const DISTRICT_OVERRIDES: &[(&str, &str)] = &[];
