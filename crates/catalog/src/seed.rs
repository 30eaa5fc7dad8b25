//! Compiled-in catalog data.
//!
//! Records are authored by hand: ids are assigned here and nowhere else,
//! `latest_update` stays an opaque `YYYY-MM-DD` string, and cover URLs are
//! never fetched by the backend. Collections are independent of each other.

use bangumi_core::{CatalogRecord, Feed};

/// Anime collection (18 works).
pub const ANIME: &[CatalogRecord] = &[
    CatalogRecord {
        id: 1,
        name: "全职猎人",
        picture_url: "https://blue-archive.io/image/avatar_students/10001.webp",
        latest_episode: 10,
        latest_update: "2023-10-03",
        subteam: "XX字幕组",
    },
    CatalogRecord {
        id: 2,
        name: "进击的巨人",
        picture_url: "https://blue-archive.io/image/avatar_students/10002.webp",
        latest_episode: 5,
        latest_update: "2023-09-28",
        subteam: "YY字幕组",
    },
    CatalogRecord {
        id: 3,
        name: "约定的梦幻岛",
        picture_url: "https://blue-archive.io/image/avatar_students/10003.webp",
        latest_episode: 6,
        latest_update: "2023-10-02",
        subteam: "ZZ字幕组",
    },
    CatalogRecord {
        id: 4,
        name: "悬崖之上",
        picture_url: "https://blue-archive.io/image/avatar_students/10004.webp",
        latest_episode: 7,
        latest_update: "2023-10-01",
        subteam: "AA字幕组",
    },
    CatalogRecord {
        id: 5,
        name: "命运石之门",
        picture_url: "https://blue-archive.io/image/avatar_students/10005.webp",
        latest_episode: 3,
        latest_update: "2023-09-29",
        subteam: "BB字幕组",
    },
    CatalogRecord {
        id: 6,
        name: "鬼灭之刃",
        picture_url: "https://blue-archive.io/image/avatar_students/10006.webp",
        latest_episode: 16,
        latest_update: "2023-10-03",
        subteam: "CC字幕组",
    },
    CatalogRecord {
        id: 7,
        name: "刺客伍六七",
        picture_url: "https://blue-archive.io/image/avatar_students/10007.webp",
        latest_episode: 8,
        latest_update: "2023-09-30",
        subteam: "DD字幕组",
    },
    CatalogRecord {
        id: 8,
        name: "海贼王",
        picture_url: "https://blue-archive.io/image/avatar_students/10008.webp",
        latest_episode: 987,
        latest_update: "2023-10-02",
        subteam: "EE字幕组",
    },
    CatalogRecord {
        id: 9,
        name: "镇魂街",
        picture_url: "https://blue-archive.io/image/avatar_students/10009.webp",
        latest_episode: 24,
        latest_update: "2023-10-01",
        subteam: "FF字幕组",
    },
    CatalogRecord {
        id: 10,
        name: "致不灭的你",
        picture_url: "https://blue-archive.io/image/avatar_students/10010.webp",
        latest_episode: 4,
        latest_update: "2023-09-28",
        subteam: "GG字幕组",
    },
    CatalogRecord {
        id: 11,
        name: "无职转生",
        picture_url: "https://blue-archive.io/image/avatar_students/10011.webp",
        latest_episode: 9,
        latest_update: "2023-10-03",
        subteam: "HH字幕组",
    },
    CatalogRecord {
        id: 12,
        name: "秦时明月",
        picture_url: "https://blue-archive.io/image/avatar_students/10012.webp",
        latest_episode: 30,
        latest_update: "2023-09-29",
        subteam: "II字幕组",
    },
    CatalogRecord {
        id: 13,
        name: "异世界魔王与召唤少女的奴隶魔术",
        picture_url: "https://blue-archive.io/image/avatar_students/10013.webp",
        latest_episode: 6,
        latest_update: "2023-10-02",
        subteam: "JJ字幕组",
    },
    CatalogRecord {
        id: 14,
        name: "灵笼",
        picture_url: "https://blue-archive.io/image/avatar_students/10014.webp",
        latest_episode: 5,
        latest_update: "2023-09-28",
        subteam: "KK字幕组",
    },
    CatalogRecord {
        id: 15,
        name: "恶魔高校的最强姬神",
        picture_url: "https://blue-archive.io/image/avatar_students/10015.webp",
        latest_episode: 12,
        latest_update: "2023-10-03",
        subteam: "LL字幕组",
    },
    CatalogRecord {
        id: 16,
        name: "生化危机：无尽黑暗",
        picture_url: "https://blue-archive.io/image/avatar_students/10016.webp",
        latest_episode: 1,
        latest_update: "2023-09-29",
        subteam: "MM字幕组",
    },
    CatalogRecord {
        id: 17,
        name: "咒术回战",
        picture_url: "https://blue-archive.io/image/avatar_students/10017.webp",
        latest_episode: 9,
        latest_update: "2023-10-02",
        subteam: "NN字幕组",
    },
    CatalogRecord {
        id: 18,
        name: "某科学的超电磁炮",
        picture_url: "https://blue-archive.io/image/avatar_students/10018.webp",
        latest_episode: 16,
        latest_update: "2023-09-30",
        subteam: "OO字幕组",
    },
];

/// Comic collection (18 works).
pub const COMIC: &[CatalogRecord] = &[
    CatalogRecord {
        id: 1,
        name: "全职猎人",
        picture_url: "https://blue-archive.io/image/avatar_students/10061.webp",
        latest_episode: 10,
        latest_update: "2023-10-03",
        subteam: "XX字幕组",
    },
    CatalogRecord {
        id: 2,
        name: "进击的巨人",
        picture_url: "https://blue-archive.io/image/avatar_students/10062.webp",
        latest_episode: 5,
        latest_update: "2023-09-28",
        subteam: "YY字幕组",
    },
    CatalogRecord {
        id: 3,
        name: "约定的梦幻岛",
        picture_url: "https://blue-archive.io/image/avatar_students/10063.webp",
        latest_episode: 6,
        latest_update: "2023-10-02",
        subteam: "ZZ字幕组",
    },
    CatalogRecord {
        id: 4,
        name: "悬崖之上",
        picture_url: "https://blue-archive.io/image/avatar_students/10064.webp",
        latest_episode: 7,
        latest_update: "2023-10-01",
        subteam: "AA字幕组",
    },
    CatalogRecord {
        id: 5,
        name: "命运石之门",
        picture_url: "https://blue-archive.io/image/avatar_students/10065.webp",
        latest_episode: 3,
        latest_update: "2023-09-29",
        subteam: "BB字幕组",
    },
    CatalogRecord {
        id: 6,
        name: "鬼灭之刃",
        picture_url: "https://blue-archive.io/image/avatar_students/10066.webp",
        latest_episode: 16,
        latest_update: "2023-10-03",
        subteam: "CC字幕组",
    },
    CatalogRecord {
        id: 7,
        name: "刺客伍六七",
        picture_url: "https://blue-archive.io/image/avatar_students/10067.webp",
        latest_episode: 8,
        latest_update: "2023-09-30",
        subteam: "DD字幕组",
    },
    CatalogRecord {
        id: 8,
        name: "海贼王",
        picture_url: "https://blue-archive.io/image/avatar_students/10068.webp",
        latest_episode: 987,
        latest_update: "2023-10-02",
        subteam: "EE字幕组",
    },
    CatalogRecord {
        id: 9,
        name: "镇魂街",
        picture_url: "https://blue-archive.io/image/avatar_students/10069.webp",
        latest_episode: 24,
        latest_update: "2023-10-01",
        subteam: "FF字幕组",
    },
    CatalogRecord {
        id: 10,
        name: "致不灭的你",
        picture_url: "https://blue-archive.io/image/avatar_students/10070.webp",
        latest_episode: 4,
        latest_update: "2023-09-28",
        subteam: "GG字幕组",
    },
    CatalogRecord {
        id: 11,
        name: "无职转生",
        picture_url: "https://blue-archive.io/image/avatar_students/10071.webp",
        latest_episode: 9,
        latest_update: "2023-10-03",
        subteam: "HH字幕组",
    },
    CatalogRecord {
        id: 12,
        name: "秦时明月",
        picture_url: "https://blue-archive.io/image/avatar_students/10072.webp",
        latest_episode: 30,
        latest_update: "2023-09-29",
        subteam: "II字幕组",
    },
    CatalogRecord {
        id: 13,
        name: "异世界魔王与召唤少女的奴隶魔术",
        picture_url: "https://blue-archive.io/image/avatar_students/10073.webp",
        latest_episode: 6,
        latest_update: "2023-10-02",
        subteam: "JJ字幕组",
    },
    CatalogRecord {
        id: 14,
        name: "灵笼",
        picture_url: "https://blue-archive.io/image/avatar_students/10074.webp",
        latest_episode: 5,
        latest_update: "2023-09-28",
        subteam: "KK字幕组",
    },
    CatalogRecord {
        id: 15,
        name: "恶魔高校的最强姬神",
        picture_url: "https://blue-archive.io/image/avatar_students/10075.webp",
        latest_episode: 12,
        latest_update: "2023-10-03",
        subteam: "LL字幕组",
    },
    CatalogRecord {
        id: 16,
        name: "生化危机：无尽黑暗",
        picture_url: "https://blue-archive.io/image/avatar_students/10076.webp",
        latest_episode: 1,
        latest_update: "2023-09-29",
        subteam: "MM字幕组",
    },
    CatalogRecord {
        id: 17,
        name: "咒术回战",
        picture_url: "https://blue-archive.io/image/avatar_students/10077.webp",
        latest_episode: 9,
        latest_update: "2023-10-02",
        subteam: "NN字幕组",
    },
    CatalogRecord {
        id: 18,
        name: "某科学的超电磁炮",
        picture_url: "https://blue-archive.io/image/avatar_students/10078.webp",
        latest_episode: 16,
        latest_update: "2023-09-30",
        subteam: "OO字幕组",
    },
];

/// Novel collection (18 works).
pub const NOVEL: &[CatalogRecord] = &[
    CatalogRecord {
        id: 1,
        name: "全职猎人",
        picture_url: "https://blue-archive.io/image/avatar_students/10031.webp",
        latest_episode: 10,
        latest_update: "2023-10-03",
        subteam: "XX字幕组",
    },
    CatalogRecord {
        id: 2,
        name: "进击的巨人",
        picture_url: "https://blue-archive.io/image/avatar_students/10032.webp",
        latest_episode: 5,
        latest_update: "2023-09-28",
        subteam: "YY字幕组",
    },
    CatalogRecord {
        id: 3,
        name: "约定的梦幻岛",
        picture_url: "https://blue-archive.io/image/avatar_students/10033.webp",
        latest_episode: 6,
        latest_update: "2023-10-02",
        subteam: "ZZ字幕组",
    },
    CatalogRecord {
        id: 4,
        name: "悬崖之上",
        picture_url: "https://blue-archive.io/image/avatar_students/10034.webp",
        latest_episode: 7,
        latest_update: "2023-10-01",
        subteam: "AA字幕组",
    },
    CatalogRecord {
        id: 5,
        name: "命运石之门",
        picture_url: "https://blue-archive.io/image/avatar_students/10035.webp",
        latest_episode: 3,
        latest_update: "2023-09-29",
        subteam: "BB字幕组",
    },
    CatalogRecord {
        id: 6,
        name: "鬼灭之刃",
        picture_url: "https://blue-archive.io/image/avatar_students/10036.webp",
        latest_episode: 16,
        latest_update: "2023-10-03",
        subteam: "CC字幕组",
    },
    CatalogRecord {
        id: 7,
        name: "刺客伍六七",
        picture_url: "https://blue-archive.io/image/avatar_students/10037.webp",
        latest_episode: 8,
        latest_update: "2023-09-30",
        subteam: "DD字幕组",
    },
    CatalogRecord {
        id: 8,
        name: "海贼王",
        picture_url: "https://blue-archive.io/image/avatar_students/10038.webp",
        latest_episode: 987,
        latest_update: "2023-10-02",
        subteam: "EE字幕组",
    },
    CatalogRecord {
        id: 9,
        name: "镇魂街",
        picture_url: "https://blue-archive.io/image/avatar_students/10039.webp",
        latest_episode: 24,
        latest_update: "2023-10-01",
        subteam: "FF字幕组",
    },
    CatalogRecord {
        id: 10,
        name: "致不灭的你",
        picture_url: "https://blue-archive.io/image/avatar_students/10040.webp",
        latest_episode: 4,
        latest_update: "2023-09-28",
        subteam: "GG字幕组",
    },
    CatalogRecord {
        id: 11,
        name: "无职转生",
        picture_url: "https://blue-archive.io/image/avatar_students/10041.webp",
        latest_episode: 9,
        latest_update: "2023-10-03",
        subteam: "HH字幕组",
    },
    CatalogRecord {
        id: 12,
        name: "秦时明月",
        picture_url: "https://blue-archive.io/image/avatar_students/10042.webp",
        latest_episode: 30,
        latest_update: "2023-09-29",
        subteam: "II字幕组",
    },
    CatalogRecord {
        id: 13,
        name: "异世界魔王与召唤少女的奴隶魔术",
        picture_url: "https://blue-archive.io/image/avatar_students/10043.webp",
        latest_episode: 6,
        latest_update: "2023-10-02",
        subteam: "JJ字幕组",
    },
    CatalogRecord {
        id: 14,
        name: "灵笼",
        picture_url: "https://blue-archive.io/image/avatar_students/10044.webp",
        latest_episode: 5,
        latest_update: "2023-09-28",
        subteam: "KK字幕组",
    },
    CatalogRecord {
        id: 15,
        name: "恶魔高校的最强姬神",
        picture_url: "https://blue-archive.io/image/avatar_students/10045.webp",
        latest_episode: 12,
        latest_update: "2023-10-03",
        subteam: "LL字幕组",
    },
    CatalogRecord {
        id: 16,
        name: "生化危机：无尽黑暗",
        picture_url: "https://blue-archive.io/image/avatar_students/10046.webp",
        latest_episode: 1,
        latest_update: "2023-09-29",
        subteam: "MM字幕组",
    },
    CatalogRecord {
        id: 17,
        name: "咒术回战",
        picture_url: "https://blue-archive.io/image/avatar_students/10047.webp",
        latest_episode: 9,
        latest_update: "2023-10-02",
        subteam: "NN字幕组",
    },
    CatalogRecord {
        id: 18,
        name: "某科学的超电磁炮",
        picture_url: "https://blue-archive.io/image/avatar_students/10048.webp",
        latest_episode: 16,
        latest_update: "2023-09-30",
        subteam: "OO字幕组",
    },
];

/// Site download updates (`/api/update0`).
pub const FEED_DOWNLOADS: Feed = Feed {
    images: &[
        "http://12club.nankai.edu.cn/upload/images/1696485103.0452442.jpg",
        "http://12club.nankai.edu.cn/upload/images/1696476421.4458344.jpg",
        "http://12club.nankai.edu.cn/upload/images/1696476477.7200944.jpg",
        "http://12club.nankai.edu.cn/upload/images/1696337498.1139002.jpg",
        "http://12club.nankai.edu.cn/upload/images/1695996968.127501.jpg",
        "http://12club.nankai.edu.cn/upload/images/1691641907.758122.jpg",
        "http://12club.nankai.edu.cn/upload/images/1688335885.6219602.jpg",
    ],
    titles: &[
        "想要成为影之实力者！ 第二季",
        "16bit的感动 ANOTHER LAYER",
        "香格里拉·弗陇提亚～屎作猎人向神作发起挑战～",
        "我推是反派大小姐",
        "葬送的芙莉莲",
        "不死少女 杀人笑剧",
        "无职转生Ⅱ ～到了异世界就拿出真本事～",
    ],
};

/// Anime updates (`/api/update1`).
pub const FEED_ANIME: Feed = Feed {
    images: &[
        "http://12club.nankai.edu.cn/upload/images/1692015321.558317.jpg",
        "http://12club.nankai.edu.cn/upload/images/1691642153.3353221.jpg",
        "http://12club.nankai.edu.cn/upload/images/1292645069.04556.jpg",
        "http://12club.nankai.edu.cn/upload/images/1689496541.1579213.jpg",
        "http://12club.nankai.edu.cn/upload/images/1676184415.3763716.jpg",
        "http://12club.nankai.edu.cn/upload/images/1680842055.1723762.jpg",
        "http://12club.nankai.edu.cn/upload/images/1682784769.7348607.jpg",
    ],
    titles: &["番剧1", "番剧2", "番剧3", "番剧4", "番剧5", "番剧6", "番剧7"],
};

/// Comic updates (`/api/update2`).
pub const FEED_COMIC: Feed = Feed {
    images: &[
        "http://12club.nankai.edu.cn/upload/images/1683380153.9022834.jpg",
        "http://12club.nankai.edu.cn/upload/images/1662259809.9725282.png",
        "http://12club.nankai.edu.cn/upload/images/1653875915.6771998.png",
        "http://12club.nankai.edu.cn/upload/images/1257138541.9568.jpg",
        "http://12club.nankai.edu.cn/upload/images/1607494151.7610898.png",
        "http://12club.nankai.edu.cn/upload/images/1650198755.4942765.jpg",
        "http://12club.nankai.edu.cn/upload/images/1649607527.1329308.jpg",
    ],
    titles: &["番剧1", "番剧2", "番剧3", "番剧4", "番剧5", "番剧6", "番剧7"],
};

/// Novel updates (`/api/update3`).
pub const FEED_NOVEL: Feed = Feed {
    images: &[
        "http://12club.nankai.edu.cn/upload/images/1663253819.3367639.jpg",
        "http://12club.nankai.edu.cn/upload/images/1616738300.4931633.png",
        "http://12club.nankai.edu.cn/upload/images/1574427873.2569954.jpg",
        "http://12club.nankai.edu.cn/upload/images/1574427984.5524557.jpeg",
        "http://12club.nankai.edu.cn/upload/images/1574427455.3186545.jpg",
        "http://12club.nankai.edu.cn/upload/images/1555827305.8916636.png",
        "http://12club.nankai.edu.cn/upload/images/1483968676.5552256.jpg",
    ],
    titles: &["番剧1", "番剧2", "番剧3", "番剧4", "番剧5", "番剧6", "番剧7"],
};
