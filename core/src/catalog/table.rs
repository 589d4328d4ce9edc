//! Static data for the 64 hexagrams, grouped by palace in the traditional
//! order: pure hexagram, first through fifth generation, wandering soul,
//! returning soul.

use zengshan_types::Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};
use zengshan_types::{Branch, Element, HexagramCode, LINE_COUNT, Palace};

use super::HexagramRecord;

const fn entry(
    code: &[u8; LINE_COUNT],
    name: &'static str,
    judgment: &'static str,
    palace: Palace,
    element: Element,
    lines: (u8, u8),
    branches: [Branch; LINE_COUNT],
) -> HexagramRecord {
    HexagramRecord::new(
        HexagramCode::from_ascii(code),
        name,
        judgment,
        palace,
        element,
        lines,
        branches,
    )
}

pub(super) static RECORDS: [HexagramRecord; 64] = [
    // 乾宫
    entry(
        b"111111",
        "乾为天",
        "乾：元，亨，利，贞。",
        Palace::Qian,
        Element::Metal,
        (6, 3),
        [Zi, Yin, Chen, Wu, Shen, Xu],
    ),
    entry(
        b"011111",
        "天风姤",
        "姤：女壮，勿用取女。",
        Palace::Qian,
        Element::Metal,
        (1, 4),
        [Chou, Hai, You, Wu, Shen, Xu],
    ),
    entry(
        b"001111",
        "天山遁",
        "遁：亨，小利贞。",
        Palace::Qian,
        Element::Metal,
        (2, 5),
        [Chen, Wu, Shen, Wu, Shen, Xu],
    ),
    entry(
        b"000111",
        "天地否",
        "否：否之匪人，不利君子贞，大往小来。",
        Palace::Qian,
        Element::Metal,
        (3, 6),
        [Wei, Si, Mao, Wu, Shen, Xu],
    ),
    entry(
        b"000011",
        "风地观",
        "观：盥而不荐，有孚颙若。",
        Palace::Qian,
        Element::Metal,
        (4, 1),
        [Wei, Si, Mao, Wei, Si, Mao],
    ),
    entry(
        b"000001",
        "山地剥",
        "剥：不利有攸往。",
        Palace::Qian,
        Element::Metal,
        (5, 2),
        [Wei, Si, Mao, Xu, Zi, Yin],
    ),
    entry(
        b"000101",
        "火地晋",
        "晋：康侯用锡马蕃庶，昼日三接。",
        Palace::Qian,
        Element::Metal,
        (4, 1),
        [Wei, Si, Mao, You, Wei, Si],
    ),
    entry(
        b"111101",
        "火天大有",
        "大有：元亨。",
        Palace::Qian,
        Element::Metal,
        (3, 6),
        [Zi, Yin, Chen, You, Wei, Si],
    ),
    // 兑宫
    entry(
        b"110110",
        "兑为泽",
        "兑：亨，利贞。",
        Palace::Dui,
        Element::Metal,
        (6, 3),
        [Si, Mao, Chou, Hai, You, Wei],
    ),
    entry(
        b"010110",
        "泽水困",
        "困：亨，贞，大人吉，无咎，有言不信。",
        Palace::Dui,
        Element::Metal,
        (1, 4),
        [Mao, Chen, Wu, Hai, You, Wei],
    ),
    entry(
        b"000110",
        "泽地萃",
        "萃：亨。王假有庙，利见大人，亨，利贞。",
        Palace::Dui,
        Element::Metal,
        (2, 5),
        [Wei, Si, Mao, Hai, You, Wei],
    ),
    entry(
        b"001110",
        "泽山咸",
        "咸：亨，利贞，取女吉。",
        Palace::Dui,
        Element::Metal,
        (3, 6),
        [Chen, Wu, Shen, Hai, You, Wei],
    ),
    entry(
        b"001010",
        "水山蹇",
        "蹇：利西南，不利东北；利见大人，贞吉。",
        Palace::Dui,
        Element::Metal,
        (4, 1),
        [Chen, Wu, Shen, Shen, Xu, Zi],
    ),
    entry(
        b"001000",
        "地山谦",
        "谦：亨，君子有终。",
        Palace::Dui,
        Element::Metal,
        (5, 2),
        [Chen, Wu, Shen, Chou, Hai, You],
    ),
    entry(
        b"001100",
        "雷山小过",
        "小过：亨，利贞，可小事，不可大事。",
        Palace::Dui,
        Element::Metal,
        (4, 1),
        [Chen, Wu, Shen, Wu, Shen, Xu],
    ),
    entry(
        b"110100",
        "雷泽归妹",
        "归妹：征凶，无攸利。",
        Palace::Dui,
        Element::Metal,
        (3, 6),
        [Si, Mao, Chou, Wu, Shen, Xu],
    ),
    // 离宫
    entry(
        b"101101",
        "离为火",
        "离：利贞，亨。畜牝牛，吉。",
        Palace::Li,
        Element::Fire,
        (6, 3),
        [Mao, Chou, Hai, You, Wei, Si],
    ),
    entry(
        b"001101",
        "火山旅",
        "旅：小亨，旅贞吉。",
        Palace::Li,
        Element::Fire,
        (1, 4),
        [Chen, Wu, Shen, You, Wei, Si],
    ),
    entry(
        b"011101",
        "火风鼎",
        "鼎：元吉，亨。",
        Palace::Li,
        Element::Fire,
        (2, 5),
        [Chou, Hai, You, You, Wei, Si],
    ),
    entry(
        b"010101",
        "火水未济",
        "未济：亨，小狐汔济，濡其尾，无攸利。",
        Palace::Li,
        Element::Fire,
        (3, 6),
        [Yin, Chen, Wu, You, Wei, Si],
    ),
    entry(
        b"010001",
        "山水蒙",
        "蒙：亨。匪我求童蒙，童蒙求我。",
        Palace::Li,
        Element::Fire,
        (4, 1),
        [Yin, Chen, Wu, Xu, Zi, Yin],
    ),
    entry(
        b"010011",
        "风水涣",
        "涣：亨。王假有庙，利涉大川，利贞。",
        Palace::Li,
        Element::Fire,
        (5, 2),
        [Yin, Chen, Wu, Wei, Si, Mao],
    ),
    entry(
        b"010111",
        "天水讼",
        "讼：有孚，窒惕，中吉。终凶。利见大人，不利涉大川。",
        Palace::Li,
        Element::Fire,
        (4, 1),
        [Yin, Chen, Wu, Wu, Shen, Xu],
    ),
    entry(
        b"101111",
        "天火同人",
        "同人：同人于野，亨。利涉大川，利君子贞。",
        Palace::Li,
        Element::Fire,
        (3, 6),
        [Yin, Chen, Wu, Wei, Si, Xu],
    ),
    // 震宫
    entry(
        b"100100",
        "震为雷",
        "震：亨。震来虩虩，笑言哑哑。",
        Palace::Zhen,
        Element::Wood,
        (6, 3),
        [Zi, Yin, Chen, Wu, Shen, Xu],
    ),
    entry(
        b"000100",
        "雷地豫",
        "豫：利建侯行师。",
        Palace::Zhen,
        Element::Wood,
        (1, 4),
        [Wei, Si, Mao, Wu, Shen, Xu],
    ),
    entry(
        b"010100",
        "雷水解",
        "解：利西南，无所往，其来复吉。",
        Palace::Zhen,
        Element::Wood,
        (2, 5),
        [Yin, Chen, Wu, Wu, Shen, Xu],
    ),
    entry(
        b"011100",
        "雷风恒",
        "恒：亨，无咎，利贞，利有攸往。",
        Palace::Zhen,
        Element::Wood,
        (3, 6),
        [Chou, Hai, You, Wu, Shen, Xu],
    ),
    entry(
        b"011000",
        "地风升",
        "升：元亨，用见大人，勿恤，南征吉。",
        Palace::Zhen,
        Element::Wood,
        (4, 1),
        [Chou, Hai, You, Chou, Hai, You],
    ),
    entry(
        b"011010",
        "水风井",
        "井：改邑不改井，无丧无得，往来井井。",
        Palace::Zhen,
        Element::Wood,
        (5, 2),
        [Chou, Hai, You, Shen, Xu, Zi],
    ),
    entry(
        b"011110",
        "泽风大过",
        "大过：栋桡，利有攸往，亨。",
        Palace::Zhen,
        Element::Wood,
        (4, 1),
        [Chou, Hai, You, Hai, You, Wei],
    ),
    entry(
        b"100110",
        "泽雷随",
        "随：元亨，利贞，无咎。",
        Palace::Zhen,
        Element::Wood,
        (3, 6),
        [Zi, Yin, Chen, Hai, You, Wei],
    ),
    // 巽宫
    entry(
        b"011011",
        "巽为风",
        "巽：小亨，利有攸往，利见大人。",
        Palace::Xun,
        Element::Wood,
        (6, 3),
        [Chou, Hai, You, Wei, Si, Mao],
    ),
    entry(
        b"111011",
        "风天小畜",
        "小畜：亨。密云不雨，自我西郊。",
        Palace::Xun,
        Element::Wood,
        (1, 4),
        [Zi, Yin, Chen, Wei, Si, Mao],
    ),
    entry(
        b"101011",
        "风火家人",
        "家人：利女贞。",
        Palace::Xun,
        Element::Wood,
        (2, 5),
        [Mao, Chou, Hai, Wei, Si, Mao],
    ),
    entry(
        b"100011",
        "风雷益",
        "益：利有攸往，利涉大川。",
        Palace::Xun,
        Element::Wood,
        (3, 6),
        [Zi, Yin, Chen, Wei, Si, Mao],
    ),
    entry(
        b"100111",
        "天雷无妄",
        "无妄：元，亨，利，贞。其匪正有眚，不利有攸往。",
        Palace::Xun,
        Element::Wood,
        (4, 1),
        [Zi, Yin, Chen, Wu, Shen, Xu],
    ),
    entry(
        b"100101",
        "火雷噬嗑",
        "噬嗑：亨。利用狱。",
        Palace::Xun,
        Element::Wood,
        (5, 2),
        [Zi, Yin, Chen, You, Wei, Si],
    ),
    entry(
        b"100001",
        "山雷颐",
        "颐：贞吉。观颐，自求口实。",
        Palace::Xun,
        Element::Wood,
        (4, 1),
        [Zi, Yin, Chen, Xu, Zi, Yin],
    ),
    entry(
        b"011001",
        "山风蛊",
        "蛊：元亨，利涉大川。先甲三日，后甲三日。",
        Palace::Xun,
        Element::Wood,
        (3, 6),
        [Chou, Hai, You, Xu, Zi, Yin],
    ),
    // 坎宫
    entry(
        b"010010",
        "坎为水",
        "坎：习坎，有孚，维心亨，行有尚。",
        Palace::Kan,
        Element::Water,
        (6, 3),
        [Yin, Chen, Wu, Shen, Xu, Zi],
    ),
    entry(
        b"110010",
        "水泽节",
        "节：亨。苦节不可贞。",
        Palace::Kan,
        Element::Water,
        (1, 4),
        [Si, Mao, Chou, Shen, Xu, Zi],
    ),
    entry(
        b"100010",
        "水雷屯",
        "屯：元，亨，利，贞，勿用，有攸往，利建侯。",
        Palace::Kan,
        Element::Water,
        (2, 5),
        [Zi, Yin, Chen, Shen, Xu, Zi],
    ),
    entry(
        b"101010",
        "水火既济",
        "既济：亨，小利贞，初吉终乱。",
        Palace::Kan,
        Element::Water,
        (3, 6),
        [Mao, Chou, Hai, Shen, Xu, Zi],
    ),
    entry(
        b"101110",
        "泽火革",
        "革：己日乃孚。元亨，利贞，悔亡。",
        Palace::Kan,
        Element::Water,
        (4, 1),
        [Mao, Chou, Hai, Hai, You, Wei],
    ),
    entry(
        b"101100",
        "雷火丰",
        "丰：亨。王假之，勿忧，宜日中。",
        Palace::Kan,
        Element::Water,
        (5, 2),
        [Mao, Chou, Hai, Wu, Shen, Xu],
    ),
    entry(
        b"101000",
        "地火明夷",
        "明夷：利艰贞。",
        Palace::Kan,
        Element::Water,
        (4, 1),
        [Mao, Chou, Hai, Chou, Hai, You],
    ),
    entry(
        b"010000",
        "地水师",
        "师：贞，丈人，吉无咎。",
        Palace::Kan,
        Element::Water,
        (3, 6),
        [Yin, Chen, Wu, Chou, Hai, You],
    ),
    // 艮宫
    entry(
        b"001001",
        "艮为山",
        "艮：艮其背，不获其身，行其庭，不见其人，无咎。",
        Palace::Gen,
        Element::Earth,
        (6, 3),
        [Chen, Wu, Shen, Xu, Zi, Yin],
    ),
    entry(
        b"101001",
        "山火贲",
        "贲：亨。小利有攸往。",
        Palace::Gen,
        Element::Earth,
        (1, 4),
        [Mao, Chou, Hai, Xu, Zi, Yin],
    ),
    entry(
        b"111001",
        "山天大畜",
        "大畜：利贞，不家食吉，利涉大川。",
        Palace::Gen,
        Element::Earth,
        (2, 5),
        [Zi, Yin, Chen, Xu, Zi, Yin],
    ),
    entry(
        b"110001",
        "山泽损",
        "损：有孚，元吉，无咎，可贞，利有攸往。",
        Palace::Gen,
        Element::Earth,
        (3, 6),
        [Si, Mao, Chou, Xu, Zi, Yin],
    ),
    entry(
        b"110101",
        "火泽睽",
        "睽：小事吉。",
        Palace::Gen,
        Element::Earth,
        (4, 1),
        [Si, Mao, Chou, You, Wei, Si],
    ),
    entry(
        b"110111",
        "天泽履",
        "履：履虎尾，不咥人，亨。",
        Palace::Gen,
        Element::Earth,
        (5, 2),
        [Si, Mao, Chou, Wu, Shen, Xu],
    ),
    entry(
        b"110011",
        "风泽中孚",
        "中孚：豚鱼吉，利涉大川，利贞。",
        Palace::Gen,
        Element::Earth,
        (4, 1),
        [Si, Mao, Chou, Wei, Si, Mao],
    ),
    entry(
        b"001011",
        "风山渐",
        "渐：女归吉，利贞。",
        Palace::Gen,
        Element::Earth,
        (3, 6),
        [Chen, Wu, Shen, Wei, Si, Mao],
    ),
    // 坤宫
    entry(
        b"000000",
        "坤为地",
        "坤：元，亨，利牝马之贞。",
        Palace::Kun,
        Element::Earth,
        (6, 3),
        [Wei, Si, Mao, Chou, Hai, You],
    ),
    entry(
        b"100000",
        "地雷复",
        "复：亨。出入无疾，朋来无咎。",
        Palace::Kun,
        Element::Earth,
        (1, 4),
        [Zi, Yin, Chen, Chou, Hai, You],
    ),
    entry(
        b"110000",
        "地泽临",
        "临：元，亨，利，贞。至于八月有凶。",
        Palace::Kun,
        Element::Earth,
        (2, 5),
        [Si, Mao, Chou, Chou, Hai, You],
    ),
    entry(
        b"111000",
        "地天泰",
        "泰：小往大来，吉亨。",
        Palace::Kun,
        Element::Earth,
        (3, 6),
        [Zi, Yin, Chen, Chou, Hai, You],
    ),
    entry(
        b"111100",
        "雷天大壮",
        "大壮：利贞。",
        Palace::Kun,
        Element::Earth,
        (4, 1),
        [Zi, Yin, Chen, Wu, Shen, Xu],
    ),
    entry(
        b"111110",
        "泽天夬",
        "夬：扬于王庭，孚号，有厉，告自邑，不利即戎，利有攸往。",
        Palace::Kun,
        Element::Earth,
        (5, 2),
        [Zi, Yin, Chen, Hai, You, Wei],
    ),
    entry(
        b"111010",
        "水天需",
        "需：有孚，光亨，贞吉。利涉大川。",
        Palace::Kun,
        Element::Earth,
        (4, 1),
        [Zi, Yin, Chen, Shen, Xu, Zi],
    ),
    entry(
        b"000010",
        "水地比",
        "比：吉。原筮元永贞，无咎。",
        Palace::Kun,
        Element::Earth,
        (3, 6),
        [Wei, Si, Mao, Shen, Xu, Zi],
    ),
];
