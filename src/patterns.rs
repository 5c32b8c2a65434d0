// Lexical pattern tables for register judgement.
// Feature tables collect evidence for one register; each exclusion table only
// subtracts matches its feature table already counted on the same segment.

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

/// Cantonese characters and collocations not found in Standard Written Chinese.
const CANTO_FEATURE: &str = r"[嘅嗰啲咗佢喺咁噉冇啩哋畀嚟諗惗乜嘢閪撚𨳍𨳊瞓睇㗎餸𨋢摷喎嚿噃嚡嘥嗮啱揾搵喐逳噏𢳂岋糴揈捹撳㩒𥄫攰癐冚孻冧𡃁嚫跣𨃩瀡氹嬲掟孭黐唞㪗埞忟𢛴嗱係唔喇俾]|唔[係得會好識使洗駛通知到去走掂該錯差]|點[樣會做得解]|[琴尋噚聽第]日|[而依]家|家[下陣]|[真就實梗又話都]係|邊[度個位科]|[嚇凍攝整揩逢淥浸激][親嚫]|[橫搞傾諗得唔]掂|仲[有係話要得好衰唔]|返[學工去歸]|執[好生實返輸]|[留坐剩]低|屋企|收皮|慳錢|傾[偈計]|幫襯|求其|是[但旦]|[濕溼]碎|零舍|肉[赤緊酸]|核突|同埋|勁[秋抽]|邊[度隻條張樣個]|去邊";

/// Phrases where Cantonese feature characters legitimately occur in SWC.
const CANTO_EXCLUDE: &str = r"關係|吱唔|咿唔|喇嘛|喇叭|俾路支|俾斯麥";

/// SWC characters that are uncommon in written Cantonese.
const SWC_FEATURE: &str = r"[這哪唄咱啥甭那是的他她它吧沒麼么些了卻説說吃弄把也在]|而已";

/// Phrases and proper nouns where SWC feature characters occur in Cantonese.
const SWC_EXCLUDE: &str = r"亞利桑那|剎那|巴塞羅那|薩那|沙那|哈瓦那|印第安那|那不勒斯|支那|是[否日次非但旦]|[利於]是|唯命是從|頭頭是道|似是而非|自以為是|俯拾皆是|撩是鬥非|莫衷一是|唯才是用|[目綠藍紅中]的|的[士確式]|波羅的海|眾矢之的|的而且確|大眼的度|的起心肝|些[微少許小]|[淹沉浸覆湮埋沒出]沒|沒[落頂收]|神出鬼沒|了[結無斷當然哥結得解事之]|[未明]了|不得了|大不了|他[信人國日殺鄉]|[其利無排維結]他|馬耳他|他加祿|他山之石|其[它]|[酒網水貼]吧|吧[台臺枱檯]|[退忘阻]卻|卻步|[遊游小傳解學假淺眾衆訴論][説說]|[說説][話服明]|自圓其[説說]|長話短[說説]|不由分[說説]|吃[虧苦力]|弄[堂]|把[握柄持火風關鬼口嘴戲脈炮砲屁手聲]|大把|拉把|冧把|掃把|拖把|得把|加把|下把位|一把年紀|把死人聲|自把自為|兩把|三把|四把|五把|幾把|拎把|第一把|泵把|也[許門]|[非威]也|也文也武|之乎者也|維也納|空空如也|頭也不回|時也[命運]也|在[場乎下校學行任野意於望內案旁生世心線逃位即職座囚此家]|[站志旨爭所勝衰實內外念現好健存潛差弊活]在|我思故我在";

/// One Han base code point (CJK Unified Ideographs plus extension blocks,
/// a fixed set of compatibility ideographs, and the ideographic iteration
/// marks), optionally followed by a variation selector. Each match is one
/// unit of Han length.
const HAN_CHAR: &str = r"[\u{4e00}-\u{9fff}\u{3400}-\u{4dbf}\u{20000}-\u{2a6df}\u{2a700}-\u{2ebef}\u{30000}-\u{323af}\u{fa0e}\u{fa0f}\u{fa11}\u{fa13}\u{fa14}\u{fa1f}\u{fa21}\u{fa23}\u{fa24}\u{fa27}\u{fa28}\u{fa29}\u{3006}\u{3007}][\u{fe00}-\u{fe0f}\u{e0100}-\u{e01ef}]?";

/// Paired quotation marks. Each style matches non-greedily and cannot nest
/// another instance of its own opening mark, but may contain other styles.
const QUOTE_PAIRS: &str = r"「[^「]*」|“[^“]*”|《[^《]*》|【[^【]*】|『[^『]*』";

/// Sentential delimiters used to split a document into segments.
const DELIMITERS: &str = "[，。；？！⋯\n]";

/// Compiled pattern tables, built once and read-only afterwards.
///
/// Compilation happens at detector construction; every judgement call reuses
/// the same compiled regexes, so a single instance is safe to share across
/// threads.
pub struct PatternTables {
    pub canto_feature: Regex,
    pub canto_exclude: Regex,
    pub swc_feature: Regex,
    pub swc_exclude: Regex,
    pub han_char: Regex,
    pub quote_pairs: Regex,
    pub delimiters: Regex,
}

impl PatternTables {
    /// Compile all seven tables.
    pub fn compile() -> Result<Self> {
        let tables = Self {
            canto_feature: Regex::new(CANTO_FEATURE)?,
            canto_exclude: Regex::new(CANTO_EXCLUDE)?,
            swc_feature: Regex::new(SWC_FEATURE)?,
            swc_exclude: Regex::new(SWC_EXCLUDE)?,
            han_char: Regex::new(HAN_CHAR)?,
            quote_pairs: Regex::new(QUOTE_PAIRS)?,
            delimiters: Regex::new(DELIMITERS)?,
        };
        debug!("compiled pattern tables");
        Ok(tables)
    }
}

/// Count non-overlapping matches of `re` in `haystack`.
pub(crate) fn count_matches(re: &Regex, haystack: &str) -> usize {
    re.find_iter(haystack).count()
}

/// Collect non-overlapping matches of `re` as borrowed slices of `haystack`.
pub(crate) fn find_matches<'h>(re: &Regex, haystack: &'h str) -> Vec<&'h str> {
    re.find_iter(haystack).map(|m| &haystack[m.range()]).collect()
}
