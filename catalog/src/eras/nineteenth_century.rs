//! Late 19th century era (1860-1900).
//!
//! The only era with authored courses: French Impressionism (Monet,
//! Renoir) and Pointillism (Seurat).

use crate::eras::EraProvider;
use crate::types::{
    BioEvent, Era, EraId, Lesson, LessonReward, LessonStatus, Level, LevelStatus, MascotState,
    Painter, Region, School, Stars,
};

/// Provider for the late 19th century era.
pub struct NineteenthCenturyEra;

impl EraProvider for NineteenthCenturyEra {
    fn era(&self) -> Era {
        Era {
            id: EraId::NineteenthCentury,
            name: "19世纪后期".to_string(),
            range: "1860-1900".to_string(),
            color: "bg-purple-600".to_string(),
        }
    }

    fn default_regions(&self) -> Vec<Region> {
        vec![Region {
            id: "region-fr".to_string(),
            name: "法国".to_string(),
            flag: "🇫🇷".to_string(),
            description: "现代艺术的摇篮".to_string(),
            schools: vec![impressionism(), pointillism()],
        }]
    }
}

fn impressionism() -> School {
    School {
        id: "school-impressionism".to_string(),
        name: "印象派".to_string(),
        description: "捕捉瞬间的光影变化".to_string(),
        color: "bg-purple-500".to_string(),
        border_color: "border-purple-700".to_string(),
        painters: vec![monet(), renoir()],
    }
}

fn pointillism() -> School {
    School {
        id: "school-pointillism".to_string(),
        name: "点彩派".to_string(),
        description: "理性的光色科学".to_string(),
        color: "bg-teal-500".to_string(),
        border_color: "border-teal-700".to_string(),
        painters: vec![seurat()],
    }
}

fn monet() -> Painter {
    Painter {
        id: "painter-monet".to_string(),
        name: "莫奈".to_string(),
        name_en: "Claude Monet".to_string(),
        avatar: "🧔🏼‍♂️".to_string(),
        desc: "印象派之父".to_string(),
        birth_place: Some("法国·巴黎".to_string()),
        lifespan: Some("1840 - 1926".to_string()),
        school_name: Some("印象派".to_string()),
        mascot_state: MascotState::Waving,
        card_level: 3,
        bio_events: vec![
            bio(
                "1840",
                "莫奈诞生",
                "莫奈出生于巴黎。他在那里结识了欧仁·布丹，并开始学习油画和室外写生。",
                "👶",
                "莫奈童年时期的巴黎街头",
            ),
            bio(
                "1872",
                "《印象·日出》与印象派",
                "他在勒阿弗尔创作了这幅描绘港口晨雾的作品。确立了他的风格。",
                "🌅",
                "改变艺术史的《印象·日出》",
            ),
            bio(
                "1883",
                "定居吉维尼",
                "莫奈搬到了吉维尼。他在这里买下了一处房产，并建造著名的水上花园。",
                "🏡",
                "吉维尼花园的日本桥",
            ),
        ],
        levels: vec![level(
            "光影初探",
            vec![
                lesson(
                    101,
                    "日出·印象",
                    LessonStatus::Completed,
                    3,
                    "🌅",
                    LessonReward::painting("日出·印象", "🌅")
                        .with_name_en("Impression, Sunrise")
                        .with_year("1872")
                        .with_location("巴黎马蒙丹莫奈美术馆")
                        .with_material("布面油画"),
                ),
                lesson(
                    102,
                    "干草堆",
                    LessonStatus::Completed,
                    2,
                    "🌾",
                    LessonReward::painting("干草堆", "🌾")
                        .with_name_en("Haystacks")
                        .with_year("1890")
                        .with_location("芝加哥艺术博物馆")
                        .with_material("布面油画"),
                ),
                lesson(
                    104,
                    "撑阳伞的女人",
                    LessonStatus::Completed,
                    3,
                    "☂️",
                    LessonReward::painting("撑阳伞的女人", "☂️")
                        .with_name_en("Woman with a Parasol")
                        .with_year("1875"),
                ),
                lesson(
                    105,
                    "圣拉扎尔火车站",
                    LessonStatus::Active,
                    0,
                    "🚂",
                    LessonReward::painting("圣拉扎尔火车站", "🚂")
                        .with_name_en("The Saint-Lazare Station")
                        .with_year("1877"),
                ),
            ],
        )],
    }
}

fn renoir() -> Painter {
    Painter {
        id: "painter-renoir".to_string(),
        name: "雷诺阿".to_string(),
        name_en: "Pierre-Auguste Renoir".to_string(),
        avatar: "👨🏻‍🎨".to_string(),
        desc: "幸福与甜美".to_string(),
        birth_place: None,
        lifespan: None,
        school_name: None,
        mascot_state: MascotState::Active,
        card_level: 2,
        bio_events: Vec::new(),
        levels: vec![level(
            "人物与生活",
            vec![
                lesson(
                    401,
                    "煎饼磨坊",
                    LessonStatus::Completed,
                    3,
                    "💃",
                    LessonReward::painting("煎饼磨坊的舞会", "💃")
                        .with_name_en("Bal du moulin de la Galette")
                        .with_year("1876"),
                ),
                lesson(
                    402,
                    "游艇午餐",
                    LessonStatus::Active,
                    0,
                    "🍽️",
                    LessonReward::painting("游艇上的午餐", "🍽️")
                        .with_name_en("Luncheon of the Boating Party")
                        .with_year("1881"),
                ),
            ],
        )],
    }
}

fn seurat() -> Painter {
    Painter {
        id: "painter-seurat".to_string(),
        name: "修拉".to_string(),
        name_en: "Georges Seurat".to_string(),
        avatar: "🎨".to_string(),
        desc: "点彩派创始人".to_string(),
        birth_place: None,
        lifespan: None,
        school_name: Some("点彩派".to_string()),
        mascot_state: MascotState::Active,
        card_level: 2,
        bio_events: Vec::new(),
        levels: vec![level(
            "色彩科学",
            vec![
                lesson(
                    611,
                    "大碗岛",
                    LessonStatus::Completed,
                    3,
                    "⛱️",
                    LessonReward::painting("大碗岛的星期天下午", "⛱️")
                        .with_name_en("A Sunday Afternoon on the Island of La Grande Jatte")
                        .with_year("1884"),
                ),
                lesson(
                    612,
                    "阿尼埃尔浴者",
                    LessonStatus::Active,
                    0,
                    "🏊",
                    LessonReward::painting("阿尼埃尔的浴者", "🏊")
                        .with_name_en("Bathers at Asnières")
                        .with_year("1884"),
                ),
            ],
        )],
    }
}

fn bio(year: &str, title: &str, desc: &str, image: &str, caption: &str) -> BioEvent {
    BioEvent {
        year: year.to_string(),
        title: title.to_string(),
        desc: desc.to_string(),
        image: image.to_string(),
        image_caption: Some(caption.to_string()),
        story_id: None,
    }
}

// Every authored painter has a single beginner level.
fn level(label: &str, lessons: Vec<Lesson>) -> Level {
    Level {
        id: "lvl-1".to_string(),
        name: "初级".to_string(),
        label: label.to_string(),
        status: LevelStatus::Active,
        lessons,
    }
}

fn lesson(
    id: u32,
    name: &str,
    status: LessonStatus,
    stars: u8,
    icon: &str,
    reward: LessonReward,
) -> Lesson {
    Lesson {
        id,
        name: name.to_string(),
        status,
        stars: Stars::new(stars).unwrap_or_default(),
        icon: icon.to_string(),
        reward,
        is_boss: false,
    }
}
