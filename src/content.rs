//! Static trip content: itinerary days, checklist items, phrasebook
//! categories, and the copy shown on the overview/onboarding/my-page
//! screens. Everything here is definitional; indices into these tables are
//! stable identifiers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub time: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub image: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub location: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub day: u8,
    pub date: &'static str,
    pub highlight: &'static str,
    pub activities: &'static [Activity],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub important: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    pub kr: &'static str,
    pub jp: &'static str,
    pub roman: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub phrases: &'static [Phrase],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightLeg {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledInfo {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub day_label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
}

const IMG_DEPARTURE: &str = "https://images.unsplash.com/photo-1634557250864-148750dd4d1a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxhaXJwbGFuZSUyMGRlcGFydHVyZSUyMGFpcnBvcnR8ZW58MXx8fHwxNzY0ODM4MjEwfDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_ARRIVAL: &str = "https://images.unsplash.com/photo-1665946460052-ccebf469ac31?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxhaXJwb3J0JTIwYXJyaXZhbCUyMHRlcm1pbmFsfGVufDF8fHx8MTc2NDgzODIxMXww&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_GARDEN: &str = "https://images.unsplash.com/photo-1759301248923-96589a0e6628?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxqYXBhbmVzZSUyMGdhcmRlbiUyMHBvbmQlMjBjaW5lbWF0aWN8ZW58MXx8fHwxNzY0NzUzODIzfDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_MOUNTAIN: &str = "https://images.unsplash.com/photo-1555284859-3de6f0646424?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtb3VudGFpbiUyMHN1bnNldCUyMGphcGFuJTIwY2luZW1hdGljfGVufDF8fHx8MTc2NDc1MzgyNHww&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_SOUVENIR: &str = "https://images.unsplash.com/photo-1747014914522-2777a6947b66?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxzaG9wcGluZyUyMGphcGFuJTIwc291dmVuaXJ8ZW58MXx8fHwxNzY0ODM4MjE0fDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_MEAL: &str = "https://images.unsplash.com/photo-1711010345222-cbb7aa69dd16?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxqYXBhbmVzZSUyMHRyYWRpdGlvbmFsJTIwbWVhbHxlbnwxfHx8fDE3NjQ4MzgyMTF8MA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_BUS: &str = "https://images.unsplash.com/photo-1756723701257-46513cd36fc1?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxidXMlMjB0cmFuc3BvcnRhdGlvbnxlbnwxfHx8fDE3NjQ4MzgyMTF8MA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_SHRINE: &str = "https://images.unsplash.com/photo-1644413239414-33a8bf405db9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxqYXBhbmVzZSUyMHRlbXBsZSUyMHNocmluZXxlbnwxfHx8fDE3NjQ3NjU1NTh8MA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_HOTEL: &str = "https://images.unsplash.com/photo-1758448500688-3ababa93fd67?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxob3RlbCUyMGNoZWNrJTIwaW4lMjBsdXh0cnl8ZW58MXx8fHwxNzY0ODM4MjEyfDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_KAISENDON: &str = "https://images.unsplash.com/photo-1679279726946-a158b8bcaa23?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxrYWlzZW5kb24lMjBqYXBhbmVzZSUyMHNlYWZvb2QlMjByaWNlJTIwYm93bHxlbnwxfHx8fDE3NjQ4NTMwODF8MA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_ONSEN: &str = "https://images.unsplash.com/photo-1764057146191-ffbdc2c9c687?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxqYXBhbmVzZSUyMG9uc2VuJTIwb3V0ZG9vciUyMGhvdCUyMHNwcmluZ3xlbnwxfHx8fDE3NjQ4Mzk2NDN8MA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_BREAKFAST: &str = "https://images.unsplash.com/photo-1722477936580-84aa10762b0b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxicmVha2Zhc3QlMjBob3RlbCUyMGJ1ZmZldHxlbnwxfHx8fDE3NjQ4MzgyMTR8MA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_FERRY: &str = "https://images.unsplash.com/photo-1751412189089-5f2e062e5469?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmZXJyeSUyMGJvYXQlMjBvY2VhbnxlbnwxfHx8fDE3NjQ4MzgyMTN8MA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_OLIVE: &str = "https://images.unsplash.com/photo-1722228097356-bd0202d99367?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxvbGl2ZSUyMGdyb3ZlJTIwbWVkaXRlcnJhbmVhbnxlbnwxfHx8fDE3NjQ3NTM4MjR8MA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_GORGE: &str = "https://images.unsplash.com/photo-1710752968127-6290b021e68a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtb3VudGFpbiUyMGdvcmdlJTIwbmF0dXJlfGVufDF8fHx8MTc2NDc1MzgyNXww&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_SUSHI: &str = "https://images.unsplash.com/photo-1722192966855-75aa007abe09?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxqYXBhbmVzZSUyMHN1c2hpJTIwZnJlc2h8ZW58MXx8fHwxNzY0ODUzMDgxfDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_SCHOOL: &str = "https://images.unsplash.com/photo-1599579086763-717c15444c74?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxqYXBhbmVzZSUyMHNjaG9vbCUyMGJ1aWxkaW5nfGVufDF8fHx8MTc2NDgzODIxNHww&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_COAST: &str = "https://images.unsplash.com/photo-1691422066850-de273fe9008d?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjb2FzdGFsJTIwbGFuZHNjYXBlJTIwYmVhY2glMjBzdW5zZXR8ZW58MXx8fHwxNzY0NzUzODI1fDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_TEISHOKU: &str = "https://images.unsplash.com/photo-1763627719029-d7122ae87e8f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxqYXBhbmVzZSUyMGhvbWUlMjBjb29raW5nJTIwdGVpc2hva3V8ZW58MXx8fHwxNzY0ODUzMDgxfDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_NIGHT_WALK: &str = "https://images.unsplash.com/photo-1644949064195-e60f39dd2b3f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjaXR5JTIwbmlnaHQlMjB3YWxrfGVufDF8fHx8MTc2NDgzODIxNHww&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_BENESSE: &str = "https://images.unsplash.com/photo-1667396543485-92c13ffd69f6?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxiZW5lc3NlJTIwYXJ0JTIwbXVzZXVtJTIwbmFvc2hpbWF8ZW58MXx8fHwxNzY0ODM4OTQ1fDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_CHICHU: &str = "https://images.unsplash.com/photo-1686616099216-116637548f69?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjaGljaHUlMjBhcnQlMjBtdXNldW0lMjB0YWRhbyUyMGFuZG98ZW58MXx8fHwxNzY0ODM4OTQ2fDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_YAKINIKU: &str = "https://images.unsplash.com/photo-1608855815815-4edc035e39ad?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxqYXBhbmVzZSUyMHlha2luaWt1JTIwZ3JpbGxlZCUyMG1lYXR8ZW58MXx8fHwxNzY0ODUzNDI0fDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_PUMPKIN: &str = "https://images.unsplash.com/photo-1762776639828-bb304c9acb6c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxyZWQlMjBwdW1wa2luJTIwc2N1bHB0dXJlJTIwYXJ0fGVufDF8fHx8MTc2NDg0OTA2MHww&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_MUSEUM: &str = "https://images.unsplash.com/photo-1645986321095-e2b0cc845c9b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjb250ZW1wb3JhcnklMjBhcnQlMjBtdXNldW0lMjBpbnRlcmlvcnxlbnwxfHx8fDE3NjQ4Mzg5NDZ8MA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_KAISEKI: &str = "https://images.unsplash.com/photo-1742968922494-d464972b81a7?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxrYWlzZWtpJTIwcnlvcmklMjBqYXBhbmVzZSUyMGN1aXNpbmV8ZW58MXx8fHwxNzY0ODUzMDgyfDA&ixlib=rb-4.1.0&q=80&w=1080";
const IMG_KONBINI: &str = "https://images.unsplash.com/photo-1761585455811-6d4d232ddf52?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxqYXBhbmVzZSUyMGNvbnZlbmllbmNlJTIwc3RvcmUlMjBpbnRlcmlvcnxlbnwxfHx8fDE3NjQ4NTMwODJ8MA&ixlib=rb-4.1.0&q=80&w=1080";

pub const DAYS: &[Day] = &[
    Day {
        day: 1,
        date: "2월 2일 (월)",
        highlight: "다카마쓰 도착",
        activities: &[
            Activity {
                time: "08:45",
                title: "인천공항 출발",
                description: Some("에어서울 RS741편"),
                image: Some(IMG_DEPARTURE),
                tags: &["출발"],
                location: Some("인천국제공항"),
            },
            Activity {
                time: "10:30",
                title: "다카마쓰공항 도착",
                description: Some("입국 후 전용버스 미팅"),
                image: Some(IMG_ARRIVAL),
                tags: &["도착"],
                location: Some("다카마쓰 공항"),
            },
            Activity {
                time: "11:00",
                title: "리츠린공원",
                description: Some("일본 3대 정원 중 하나. 에도시대 다이묘 정원의 아름다움"),
                image: Some(IMG_GARDEN),
                tags: &["정원", "포토존", "자연"],
                location: Some("리츠린공원"),
            },
            Activity {
                time: "12:30",
                title: "야시마 전망대",
                description: Some("세토나이카이의 절경을 한눈에"),
                image: Some(IMG_MOUNTAIN),
                tags: &["전망", "자연"],
                location: Some("야시마 전망대"),
            },
            Activity {
                time: "13:00",
                title: "야시마 다카라베키",
                description: Some("전통 기념품샵 및 특산물 쇼핑"),
                image: Some(IMG_SOUVENIR),
                tags: &["쇼핑"],
                location: Some("야시마 다카라베키"),
            },
            Activity {
                time: "13:30",
                title: "중식",
                description: Some("현지식 (포함)"),
                image: Some(IMG_MEAL),
                tags: &["식사"],
                location: Some("다카마쓰시"),
            },
            Activity {
                time: "14:30",
                title: "사누키 영업 전망대",
                description: Some("360도 파노라마 뷰"),
                image: Some(IMG_MOUNTAIN),
                tags: &["전망"],
                location: Some("사누키 영업 전망대"),
            },
            Activity {
                time: "15:30",
                title: "고토히라 이동",
                description: Some("전용버스"),
                image: Some(IMG_BUS),
                tags: &["이동"],
                location: Some("고토히라"),
            },
            Activity {
                time: "16:30",
                title: "곤피라궁 투어",
                description: Some("785개 계단으로 이어지는 신성한 신사"),
                image: Some(IMG_SHRINE),
                tags: &["신사", "문화", "전통"],
                location: Some("곤피라궁"),
            },
            Activity {
                time: "18:00",
                title: "코토히라 온천 코바이테이 호텔 체크인",
                description: Some("전통 온천 료칸"),
                image: Some(IMG_HOTEL),
                tags: &["숙박", "온천"],
                location: Some("코토히라 온천 코바이테이 호텔"),
            },
            Activity {
                time: "18:30",
                title: "자유식",
                description: Some("1,000엔 지급"),
                image: Some(IMG_KAISENDON),
                tags: &["식사", "카이센동"],
                location: Some("고토히라"),
            },
            Activity {
                time: "20:00",
                title: "자유시간",
                description: Some("온천욕 및 휴식"),
                image: Some(IMG_ONSEN),
                tags: &["온천", "휴식"],
                location: Some("코토히라 온천 코바이테이 호텔"),
            },
        ],
    },
    Day {
        day: 2,
        date: "2월 3일 (화)",
        highlight: "쇼도시마 투어",
        activities: &[
            Activity {
                time: "08:00",
                title: "조식",
                description: Some("호텔식 (포함)"),
                image: Some(IMG_BREAKFAST),
                tags: &["식사"],
                location: Some("코토히라 온천 코바이테이 호텔"),
            },
            Activity {
                time: "08:30",
                title: "다카마쓰항 이동",
                description: Some("전용버스"),
                image: Some(IMG_BUS),
                tags: &["이동"],
                location: Some("다카마쓰항"),
            },
            Activity {
                time: "09:30",
                title: "페리 탑승",
                description: Some("쇼도시마로 이동"),
                image: Some(IMG_FERRY),
                tags: &["페리"],
                location: Some("다카마쓰항"),
            },
            Activity {
                time: "10:20",
                title: "올리브공원",
                description: Some("지중해 풍경의 올리브 농장과 포토존"),
                image: Some(IMG_OLIVE),
                tags: &["자연", "포토존", "핫플"],
                location: Some("쇼도시마 올리브공원"),
            },
            Activity {
                time: "11:30",
                title: "간카케이 협곡",
                description: Some("로프웨이로 오르는 일본 3대 계곡 미경"),
                image: Some(IMG_GORGE),
                tags: &["자연", "전망", "로프웨이"],
                location: Some("간카케이 쇼도시마"),
            },
            Activity {
                time: "12:30",
                title: "중식",
                description: Some("현지식 (포함)"),
                image: Some(IMG_SUSHI),
                tags: &["식사", "초밥"],
                location: Some("쇼도시마"),
            },
            Activity {
                time: "13:30",
                title: "24개의 눈동자 영화마을",
                description: Some("1950년대 일본의 향수를 느낄 수 있는 영화 세트장"),
                image: Some(IMG_SCHOOL),
                tags: &["영화촬영지", "레트로", "문화", "포토존"],
                location: Some("24개의 눈동자 영화마을"),
            },
            Activity {
                time: "15:00",
                title: "엔젤로드",
                description: Some("썰물 때만 나타나는 신비한 길"),
                image: Some(IMG_COAST),
                tags: &["해변", "포토존", "자연"],
                location: Some("엔젤로드 쇼도시마"),
            },
            Activity {
                time: "16:30",
                title: "페리 탑승",
                description: Some("다카마쓰항 복귀"),
                image: Some(IMG_FERRY),
                tags: &["페리"],
                location: Some("쇼도시마항"),
            },
            Activity {
                time: "17:35",
                title: "다카마쓰 도착",
                description: None,
                image: Some(IMG_ARRIVAL),
                tags: &[],
                location: Some("다카마쓰항"),
            },
            Activity {
                time: "18:30",
                title: "석식",
                description: Some("호텔식 (포함)"),
                image: Some(IMG_TEISHOKU),
                tags: &["식사", "일본가정식"],
                location: Some("코토히라 온천 코바이테이 호텔"),
            },
            Activity {
                time: "20:00",
                title: "자유시간",
                description: Some("쇼핑, 야경, 산책"),
                image: Some(IMG_NIGHT_WALK),
                tags: &["휴식"],
                location: Some("고토히라"),
            },
        ],
    },
    Day {
        day: 3,
        date: "2월 4일 (수)",
        highlight: "나오시마 예술섬",
        activities: &[
            Activity {
                time: "08:00",
                title: "조식",
                description: Some("호텔식 (포함)"),
                image: Some(IMG_BREAKFAST),
                tags: &["식사"],
                location: Some("코토히라 온천 코바이테이 호텔"),
            },
            Activity {
                time: "08:30",
                title: "다카마쓰항 이동",
                description: Some("전용버스"),
                image: Some(IMG_BUS),
                tags: &["이동"],
                location: Some("다카마쓰항"),
            },
            Activity {
                time: "09:30",
                title: "페리 탑승",
                description: Some("나오시마로 이동"),
                image: Some(IMG_FERRY),
                tags: &["페리"],
                location: Some("다카마쓰항"),
            },
            Activity {
                time: "10:20",
                title: "베네세 하우스 외부 작품",
                description: Some("현대미술과 자연의 조화"),
                image: Some(IMG_BENESSE),
                tags: &["예술", "미술관", "건축"],
                location: Some("베네세 하우스 나오시마"),
            },
            Activity {
                time: "11:00",
                title: "치추 미술관 · 지중 미술관",
                description: Some("안도 타다오 설계, 지하에 숨겨진 미술관"),
                image: Some(IMG_CHICHU),
                tags: &["예술", "건축", "안도타다오"],
                location: Some("치추 미술관 나오시마"),
            },
            Activity {
                time: "12:00",
                title: "중식 (자유식)",
                description: Some("패키지 비용 불포함"),
                image: Some(IMG_YAKINIKU),
                tags: &["식사", "야키니쿠"],
                location: Some("나오시마"),
            },
            Activity {
                time: "14:00",
                title: "레드 펌킨",
                description: Some("쿠사마 야요이의 상징적인 호박 조형물"),
                image: Some(IMG_PUMPKIN),
                tags: &["예술", "포토존", "핫플"],
                location: Some("레드 펌킨 나오시마"),
            },
            Activity {
                time: "15:30",
                title: "이우환 미술관",
                description: Some("안도 타다오 프로젝트"),
                image: Some(IMG_MUSEUM),
                tags: &["예술", "미술관"],
                location: Some("이우환 미술관 나오시마"),
            },
            Activity {
                time: "17:00",
                title: "페리 탑승",
                description: Some("다카마쓰항 복귀"),
                image: Some(IMG_FERRY),
                tags: &["페리"],
                location: Some("나오시마항"),
            },
            Activity {
                time: "18:00",
                title: "다카마쓰 도착",
                description: None,
                image: Some(IMG_ARRIVAL),
                tags: &[],
                location: Some("다카마쓰항"),
            },
            Activity {
                time: "18:30",
                title: "석식",
                description: Some("호텔식 (포함)"),
                image: Some(IMG_KAISEKI),
                tags: &["식사", "가이세키"],
                location: Some("다이와로이넷 호텔"),
            },
            Activity {
                time: "20:00",
                title: "자유시간",
                description: Some("호텔 휴식 또는 온천"),
                image: Some(IMG_KONBINI),
                tags: &["편의점", "쇼핑"],
                location: Some("다이와로이넷 호텔"),
            },
        ],
    },
    Day {
        day: 4,
        date: "2월 5일 (목)",
        highlight: "귀국",
        activities: &[
            Activity {
                time: "08:00",
                title: "조식 후 체크아웃",
                description: Some("호텔식 (포함)"),
                image: Some(IMG_BREAKFAST),
                tags: &["식사"],
                location: Some("다이와로이넷 호텔"),
            },
            Activity {
                time: "09:00",
                title: "공항 이동",
                description: Some("전용버스"),
                image: Some(IMG_BUS),
                tags: &["이동"],
                location: Some("다카마쓰 공항"),
            },
            Activity {
                time: "11:35",
                title: "다카마쓰공항 출발",
                description: Some("에어서울 RS742편"),
                image: Some(IMG_DEPARTURE),
                tags: &["출발"],
                location: Some("다카마쓰 공항"),
            },
            Activity {
                time: "13:20",
                title: "인천공항 도착",
                description: Some("즐거운 여행을 마치며"),
                image: Some(IMG_ARRIVAL),
                tags: &["도착"],
                location: Some("인천국제공항"),
            },
        ],
    },
];

pub const CHECKLIST_ITEMS: &[ChecklistItem] = &[
    ChecklistItem {
        id: "1",
        title: "여권 유효기간 확인",
        description: "출국일 기준 3개월 이상 여유 필요",
        important: true,
    },
    ChecklistItem {
        id: "2",
        title: "가이드·기사 경비",
        description: "현금 4,000엔 준비 (약 40,000원)",
        important: true,
    },
    ChecklistItem {
        id: "3",
        title: "본인 부담금 입금",
        description: "총무에게 12월 중 입금",
        important: true,
    },
    ChecklistItem {
        id: "4",
        title: "110V 변환기",
        description: "필수 지참 (일본 전압 110V)",
        important: true,
    },
    ChecklistItem {
        id: "5",
        title: "보조배터리",
        description: "사진 촬영이 많으니 필수 지참",
        important: false,
    },
    ChecklistItem {
        id: "6",
        title: "편한 신발",
        description: "곤피라궁 785 계단, 걷기 편한 신발 필수",
        important: false,
    },
    ChecklistItem {
        id: "7",
        title: "우천 대비 준비물",
        description: "우산 또는 레인코트",
        important: false,
    },
    ChecklistItem {
        id: "8",
        title: "개인 세면도구",
        description: "호텔에서 제공하지만 개인용품 권장",
        important: false,
    },
    ChecklistItem {
        id: "9",
        title: "개인 상비약",
        description: "멀미약, 소화제 등",
        important: false,
    },
    ChecklistItem {
        id: "10",
        title: "3일차 나오시마 중식",
        description: "불포함 - 개인 부담 (약 10,000~15,000원)",
        important: false,
    },
];

pub const PHRASE_CATEGORIES: &[PhraseCategory] = &[
    PhraseCategory {
        name: "기본 표현",
        icon: "👋",
        phrases: &[
            Phrase { kr: "안녕하세요", jp: "こんにちは", roman: "곤니치와" },
            Phrase { kr: "감사합니다", jp: "ありがとうございます", roman: "아리가토 고자이마스" },
            Phrase { kr: "죄송합니다", jp: "すみません", roman: "스미마센" },
            Phrase { kr: "부탁드립니다", jp: "お願いします", roman: "오네가이시마스" },
            Phrase { kr: "이해했어요", jp: "分かりました", roman: "와카리마시타" },
            Phrase { kr: "모르겠어요", jp: "分かりません", roman: "와카리마센" },
            Phrase { kr: "다시 말해 주세요", jp: "もう一度お願いします", roman: "모-이치도 오네가이시마스" },
            Phrase { kr: "천천히 말해 주세요", jp: "ゆっくり話してください", roman: "윳쿠리 하나시테 쿠다사이" },
            Phrase { kr: "이것은 무엇인가요?", jp: "これはなんですか？", roman: "코레와 난데스까" },
            Phrase { kr: "이거 주세요", jp: "これください", roman: "코레 쿠다사이" },
        ],
    },
    PhraseCategory {
        name: "길 찾기",
        icon: "🗺️",
        phrases: &[
            Phrase { kr: "어디인가요?", jp: "どこですか？", roman: "도코데스까" },
            Phrase { kr: "화장실은 어디인가요?", jp: "トイレはどこですか？", roman: "토이레와 도코데스까" },
            Phrase { kr: "어떻게 가나요?", jp: "どうやって行きますか？", roman: "도-얏테 이키마스까" },
            Phrase { kr: "이쪽이 맞나요?", jp: "こちらでいいですか？", roman: "코치라데 이이데스까" },
            Phrase { kr: "길을 잃었어요", jp: "道に迷いました", roman: "미치니 마요이마시타" },
            Phrase { kr: "지하철역은 어디예요?", jp: "駅はどこですか？", roman: "에키와 도코데스까" },
            Phrase { kr: "버스터미널은 어디예요?", jp: "バスターミナルはどこですか？", roman: "바스타미나루와 도코데스까" },
            Phrase { kr: "택시 불러주세요", jp: "タクシーを呼んでください", roman: "타쿠시-욘데 쿠다사이" },
            Phrase { kr: "여기로 가주세요", jp: "ここまでお願いします", roman: "코코마데 오네가이시마스" },
            Phrase { kr: "얼마나 걸려요?", jp: "どれくらいかかりますか？", roman: "도레쿠라이 카카리마스까" },
        ],
    },
    PhraseCategory {
        name: "쇼핑",
        icon: "🛍️",
        phrases: &[
            Phrase { kr: "얼마입니까?", jp: "いくらですか？", roman: "이쿠라데스까" },
            Phrase { kr: "더 싼 거 있나요?", jp: "安いのありますか？", roman: "야스이노 아리마스까" },
            Phrase { kr: "다른 색상 있나요?", jp: "ほかの色ありますか？", roman: "호카노 이로 아리마스까" },
            Phrase { kr: "사이즈 있나요?", jp: "サイズありますか？", roman: "사이즈 아리마스까" },
            Phrase { kr: "입어봐도 되나요?", jp: "試着してもいいですか？", roman: "시착 시테모 이이데스까" },
            Phrase { kr: "이것으로 할게요", jp: "これにします", roman: "코레니 시마스" },
            Phrase { kr: "카드 되나요?", jp: "カード使えますか？", roman: "카도 츠카에마스까" },
            Phrase { kr: "현금만 되나요?", jp: "現金だけですか？", roman: "겐킨 다케데스까" },
            Phrase { kr: "어디서 살 수 있나요?", jp: "どこで買えますか？", roman: "도코데 카에마스까" },
            Phrase { kr: "면세 가능한가요?", jp: "免税できますか？", roman: "멘제이 데키마스까" },
        ],
    },
    PhraseCategory {
        name: "식당/카페",
        icon: "🍽️",
        phrases: &[
            Phrase { kr: "예약했어요", jp: "予約しました", roman: "요야쿠 시마시타" },
            Phrase { kr: "두 명이요", jp: "二人です", roman: "후타리데스" },
            Phrase { kr: "메뉴 주세요", jp: "メニューお願いします", roman: "메뉴 오네가이시마스" },
            Phrase { kr: "추천해 주세요", jp: "おすすめをください", roman: "오스스메오 쿠다사이" },
            Phrase { kr: "이것은 뭐예요?", jp: "これはなんですか？", roman: "코레와 난데스까" },
            Phrase { kr: "맵나요?", jp: "辛いですか？", roman: "카라이데스까" },
            Phrase { kr: "물 주세요", jp: "お水ください", roman: "오미즈 쿠다사이" },
            Phrase { kr: "계산서 주세요", jp: "お会計お願いします", roman: "오카이케이 오네가이시마스" },
            Phrase { kr: "카드 결제 되나요?", jp: "カードで払えますか？", roman: "카도데 하루에마스까" },
            Phrase { kr: "정말 맛있어요", jp: "とてもおいしいです", roman: "토테모 오이시이데스" },
        ],
    },
    PhraseCategory {
        name: "호텔",
        icon: "🏨",
        phrases: &[
            Phrase { kr: "체크인하고 싶어요", jp: "チェックインしたいです", roman: "첵크잉 시타이데스" },
            Phrase { kr: "체크아웃 할게요", jp: "チェックアウトお願いします", roman: "첵쿠아우토 오네가이시마스" },
            Phrase { kr: "짐 맡아 주세요", jp: "荷物を預けてください", roman: "니모츠오 아즈케테 쿠다사이" },
            Phrase { kr: "조식은 몇 시예요?", jp: "朝食は何時ですか？", roman: "초쇼쿠와 난지데스까" },
            Phrase { kr: "방 청소 부탁해요", jp: "部屋の掃除お願いします", roman: "헤야노 소지 오네가이시마스" },
            Phrase { kr: "와이파이 비밀번호 알려주세요", jp: "Wi-Fiのパスワードを教えてください", roman: "와이파이노 파스와도오 오시에테 쿠다사이" },
            Phrase { kr: "에어컨 조절해 주세요", jp: "エアコンを調整してください", roman: "에아콘오 쵸-세이 시테 쿠다사이" },
            Phrase { kr: "화장실이 고장났어요", jp: "トイレが壊れています", roman: "토이레가 코와레테이마스" },
            Phrase { kr: "물/수건 더 주세요", jp: "水／タオルをもっとください", roman: "미즈/타오루 모또 쿠다사이" },
            Phrase { kr: "방을 바꿀 수 있을까요?", jp: "部屋を変えられますか？", roman: "헤야오 카에라레 마스까" },
        ],
    },
    PhraseCategory {
        name: "편의점",
        icon: "🏪",
        phrases: &[
            Phrase { kr: "이거 어디 있나요?", jp: "これはどこにありますか？", roman: "코레와 도코니 아리마스까" },
            Phrase { kr: "계산대는 어디인가요?", jp: "レジはどこですか？", roman: "레지와 도코데스까" },
            Phrase { kr: "따뜻한 음식인가요?", jp: "温かい食べ物ですか？", roman: "아타타카이 타베모노데스까" },
            Phrase { kr: "데워 주시나요?", jp: "温めてもらえますか？", roman: "아타타메테 모라에마스까" },
            Phrase { kr: "포크/스푼 주세요", jp: "フォーク／スプーンお願いします", roman: "포쿠/스푼 오네가이시마스" },
            Phrase { kr: "전자레인지 사용 가능해요?", jp: "電子レンジ使えますか？", roman: "덴시렌지 츠카에마스까" },
            Phrase { kr: "봉투 필요 없어요", jp: "袋はいりません", roman: "후쿠로와 이리마센" },
            Phrase { kr: "얼음컵 있나요?", jp: "氷のカップありますか？", roman: "코오리노 캟푸 아리마스까" },
            Phrase { kr: "이거 복권이에요?", jp: "これは宝くじですか？", roman: "코레와 타카라쿠지 데스까" },
            Phrase { kr: "젓가락을 더 주세요", jp: "お箸をもう一本ください", roman: "오하시오 모- 잇뽕 쿠다사이" },
        ],
    },
    PhraseCategory {
        name: "비상상황",
        icon: "🚨",
        phrases: &[
            Phrase { kr: "도움이 필요해요", jp: "手伝ってください", roman: "테츠닷테 쿠다사이" },
            Phrase { kr: "아파요", jp: "具合が悪いです", roman: "구아이 가 와루이데스" },
            Phrase { kr: "약국은 어디예요?", jp: "薬局はどこですか？", roman: "약쿄쿠와 도코데스까" },
            Phrase { kr: "병원은 어디예요?", jp: "病院はどこですか？", roman: "뵤-잉와 도코데스까" },
            Phrase { kr: "경찰 불러주세요", jp: "警察を呼んでください", roman: "케이사츠오 욘데 쿠다사이" },
            Phrase { kr: "지갑을 잃어버렸어요", jp: "財布をなくしました", roman: "사이후오 나쿠시마시타" },
            Phrase { kr: "여권을 잃어버렸어요", jp: "パスポートをなくしました", roman: "파스포-토오 나쿠시마시타" },
            Phrase { kr: "위험해요! 도와주세요!", jp: "危ない！助けて！", roman: "아부나이! 타스케테!" },
            Phrase { kr: "길을 잃었어요", jp: "道に迷いました", roman: "미치니 마요이마시타" },
            Phrase { kr: "응급실은 어디예요?", jp: "救急外来はどこですか？", roman: "큐큐-가이라이와 도코데스까" },
        ],
    },
];

pub const DEFAULT_PHRASE_CATEGORY: &str = "기본 표현";

pub const FLIGHT_LEGS: &[FlightLeg] = &[
    FlightLeg {
        label: "출발",
        value: "2월 2일 (월) 08:45 인천공항 출발",
        detail: "에어서울 RS741 - 제2여객터미널 E2~E10 체크인",
    },
    FlightLeg {
        label: "귀국",
        value: "2월 5일 (목) 11:35 다카마쓰공항 출발",
        detail: "에어서울 RS742",
    },
];

pub const HOTEL_INFO: &[LabeledInfo] = &[
    LabeledInfo { label: "1~2일차", value: "코토히라 온천 코바이테이 호텔 (혹은 동급)" },
    LabeledInfo { label: "3일차", value: "다이와로이넷 호텔 다카마쓰" },
    LabeledInfo { label: "객실", value: "트윈룸 (2인 1실)" },
];

pub const HERO_TITLE: &str = "2026년 2월\n연세대학교 S.I.L\n다카마쓰 여행";
pub const HERO_SUBTITLE: &str = "예술섬과 자연이 만드는\n완벽한 조화의 여정";
pub const DURATION_LABEL: &str = "3박 4일";
pub const REGION_LABEL: &str = "시코쿠지역 · 다카마쓰";

pub const QUICK_FACTS: &[LabeledInfo] = &[
    LabeledInfo { label: "출발", value: "2월 2일 (월)" },
    LabeledInfo { label: "숙박", value: "3박 4일" },
    LabeledInfo { label: "명소", value: "15곳+" },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        day_label: "Day 1",
        title: "곤피라궁",
        subtitle: "785개 계단으로 이어지는 신성한 여정",
        image: IMG_SHRINE,
    },
    Highlight {
        day_label: "Day 2",
        title: "쇼도시마 올리브공원",
        subtitle: "지중해를 닮은 일본의 숨겨진 보석",
        image: IMG_OLIVE,
    },
    Highlight {
        day_label: "Day 3",
        title: "나오시마 예술섬",
        subtitle: "안도 타다오의 건축과 현대미술의 만남",
        image: IMG_BENESSE,
    },
];

pub const INFO_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "여행 인원 : 17명",
        body: "김창욱 교수님과 SIL 연구실 구성원",
    },
    InfoCard {
        title: "주요 방문지 : 시코쿠 지역",
        body: "다카마쓰 · 쇼도시마 · 나오시마",
    },
    InfoCard {
        title: "특별한 경험",
        body: "현대미술 · 온천 · 전통문화 · 자연경관",
    },
];

pub const ONBOARDING_EYEBROW: &str = "2026 Winter Travel";
pub const ONBOARDING_TITLE: &str = "2026년 2월\n연세대학교 S.I.L\n다카마쓰 여행\n3박 4일";
pub const ONBOARDING_SUBTITLE: &str = "예술과 자연을 만나는\n시코쿠지역 프리미엄 여행";
pub const ONBOARDING_DATE_BADGE: &str = "2026년 2월 2일 (월) ~ 5일 (목)";
pub const ONBOARDING_CTA_LABEL: &str = "여행 시작하기";

pub const AUDIO_INFO_BLURB: &str = "2026년 연세대 산업공학과 시스템 인텔리전스 랩의 다카마쓰 여행을 맞이해서 발표한 남성 래퍼와 여자 보컬의 설레는 여행의 느낌을 담은 신곡";

#[must_use]
pub fn activity(day_index: usize, activity_index: usize) -> Option<&'static Activity> {
    DAYS.get(day_index)?.activities.get(activity_index)
}

#[must_use]
pub fn checklist_item(id: &str) -> Option<&'static ChecklistItem> {
    CHECKLIST_ITEMS.iter().find(|item| item.id == id)
}

#[must_use]
pub fn is_known_checklist_id(id: &str) -> bool {
    checklist_item(id).is_some()
}

#[must_use]
pub fn phrase_category(name: &str) -> Option<&'static PhraseCategory> {
    PHRASE_CATEGORIES.iter().find(|cat| cat.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_shape() {
        assert_eq!(DAYS.len(), 4);
        assert_eq!(DAYS[0].activities.len(), 12);
        assert_eq!(DAYS[1].activities.len(), 12);
        assert_eq!(DAYS[2].activities.len(), 12);
        assert_eq!(DAYS[3].activities.len(), 4);
        for (i, day) in DAYS.iter().enumerate() {
            assert_eq!(usize::from(day.day), i + 1);
        }
    }

    #[test]
    fn test_checklist_shape() {
        assert_eq!(CHECKLIST_ITEMS.len(), 10);
        let important: Vec<&str> = CHECKLIST_ITEMS
            .iter()
            .filter(|item| item.important)
            .map(|item| item.id)
            .collect();
        assert_eq!(important, vec!["1", "2", "3", "4"]);
        assert!(is_known_checklist_id("10"));
        assert!(!is_known_checklist_id("11"));
    }

    #[test]
    fn test_phrasebook_shape() {
        assert_eq!(PHRASE_CATEGORIES.len(), 7);
        for cat in PHRASE_CATEGORIES {
            assert_eq!(cat.phrases.len(), 10, "category {}", cat.name);
        }
        let total: usize = PHRASE_CATEGORIES.iter().map(|c| c.phrases.len()).sum();
        assert_eq!(total, 70);

        let basics = phrase_category(DEFAULT_PHRASE_CATEGORY).unwrap();
        assert_eq!(basics.phrases[0].kr, "안녕하세요");
        assert_eq!(basics.phrases[0].jp, "こんにちは");
    }

    #[test]
    fn test_same_text_appears_in_two_categories() {
        // "길을 잃었어요" is listed under both 길 찾기 and 비상상황.
        let count = PHRASE_CATEGORIES
            .iter()
            .flat_map(|c| c.phrases.iter())
            .filter(|p| p.kr == "길을 잃었어요")
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_place_detail_prerequisites() {
        // Day 2 and 3 each have one activity without a description; the
        // detail modal falls back to an empty string for those.
        let without_description = DAYS
            .iter()
            .flat_map(|d| d.activities.iter())
            .filter(|a| a.description.is_none())
            .count();
        assert_eq!(without_description, 2);
    }
}
