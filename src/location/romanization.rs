//! Korean → romanized names for provinces and counties.
//!
//! Keys are matched exactly against the district segments. Every first-level
//! name in the gazetteer has an entry (including pre-2023 names); county
//! coverage is partial and unknown counties fall back to the Korean spelling.

/// Immutable lookup passed into candidate generation.
#[derive(Debug, Clone, Copy)]
pub struct TransliterationTable {
    provinces: &'static [(&'static str, &'static str)],
    counties: &'static [(&'static str, &'static str)],
}

impl TransliterationTable {
    pub const fn new(
        provinces: &'static [(&'static str, &'static str)],
        counties: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { provinces, counties }
    }

    pub fn province(&self, korean: &str) -> Option<&'static str> {
        lookup(self.provinces, korean)
    }

    pub fn county(&self, korean: &str) -> Option<&'static str> {
        lookup(self.counties, korean)
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Built-in table for South Korean administrative names.
pub const KOREA: TransliterationTable = TransliterationTable::new(PROVINCES, COUNTIES);

const PROVINCES: &[(&str, &str)] = &[
    ("서울특별시", "Seoul"),
    ("부산광역시", "Busan"),
    ("대구광역시", "Daegu"),
    ("인천광역시", "Incheon"),
    ("광주광역시", "Gwangju"),
    ("대전광역시", "Daejeon"),
    ("울산광역시", "Ulsan"),
    ("세종특별자치시", "Sejong"),
    ("경기도", "Gyeonggi-do"),
    ("강원도", "Gangwon-do"),
    ("강원특별자치도", "Gangwon-do"),
    ("충청북도", "Chungcheongbuk-do"),
    ("충청남도", "Chungcheongnam-do"),
    ("전라북도", "Jeollabuk-do"),
    ("전북특별자치도", "Jeollabuk-do"),
    ("전라남도", "Jeollanam-do"),
    ("경상북도", "Gyeongsangbuk-do"),
    ("경상남도", "Gyeongsangnam-do"),
    ("제주특별자치도", "Jeju-do"),
];

// Names shared between metropolitan cities (중구, 서구, ...) romanize identically.
const COUNTIES: &[(&str, &str)] = &[
    // Seoul
    ("종로구", "Jongno-gu"),
    ("중구", "Jung-gu"),
    ("용산구", "Yongsan-gu"),
    ("성동구", "Seongdong-gu"),
    ("광진구", "Gwangjin-gu"),
    ("동대문구", "Dongdaemun-gu"),
    ("중랑구", "Jungnang-gu"),
    ("성북구", "Seongbuk-gu"),
    ("강북구", "Gangbuk-gu"),
    ("도봉구", "Dobong-gu"),
    ("노원구", "Nowon-gu"),
    ("은평구", "Eunpyeong-gu"),
    ("서대문구", "Seodaemun-gu"),
    ("마포구", "Mapo-gu"),
    ("양천구", "Yangcheon-gu"),
    ("강서구", "Gangseo-gu"),
    ("구로구", "Guro-gu"),
    ("금천구", "Geumcheon-gu"),
    ("영등포구", "Yeongdeungpo-gu"),
    ("동작구", "Dongjak-gu"),
    ("관악구", "Gwanak-gu"),
    ("서초구", "Seocho-gu"),
    ("강남구", "Gangnam-gu"),
    ("송파구", "Songpa-gu"),
    ("강동구", "Gangdong-gu"),
    // Metropolitan cities
    ("서구", "Seo-gu"),
    ("동구", "Dong-gu"),
    ("남구", "Nam-gu"),
    ("북구", "Buk-gu"),
    ("영도구", "Yeongdo-gu"),
    ("부산진구", "Busanjin-gu"),
    ("동래구", "Dongnae-gu"),
    ("해운대구", "Haeundae-gu"),
    ("사하구", "Saha-gu"),
    ("금정구", "Geumjeong-gu"),
    ("연제구", "Yeonje-gu"),
    ("수영구", "Suyeong-gu"),
    ("사상구", "Sasang-gu"),
    ("기장군", "Gijang-gun"),
    ("수성구", "Suseong-gu"),
    ("달서구", "Dalseo-gu"),
    ("달성군", "Dalseong-gun"),
    ("군위군", "Gunwi-gun"),
    ("미추홀구", "Michuhol-gu"),
    ("연수구", "Yeonsu-gu"),
    ("남동구", "Namdong-gu"),
    ("부평구", "Bupyeong-gu"),
    ("계양구", "Gyeyang-gu"),
    ("강화군", "Ganghwa-gun"),
    ("옹진군", "Ongjin-gun"),
    ("광산구", "Gwangsan-gu"),
    ("유성구", "Yuseong-gu"),
    ("대덕구", "Daedeok-gu"),
    ("울주군", "Ulju-gun"),
    // Gyeonggi-do
    ("수원시", "Suwon"),
    ("성남시", "Seongnam"),
    ("고양시", "Goyang"),
    ("용인시", "Yongin"),
    ("부천시", "Bucheon"),
    ("안산시", "Ansan"),
    ("안양시", "Anyang"),
    ("남양주시", "Namyangju"),
    ("화성시", "Hwaseong"),
    ("평택시", "Pyeongtaek"),
    ("의정부시", "Uijeongbu"),
    ("시흥시", "Siheung"),
    ("파주시", "Paju"),
    ("김포시", "Gimpo"),
    ("광명시", "Gwangmyeong"),
    ("광주시", "Gwangju"),
    ("군포시", "Gunpo"),
    ("하남시", "Hanam"),
    ("오산시", "Osan"),
    ("이천시", "Icheon"),
    ("안성시", "Anseong"),
    ("의왕시", "Uiwang"),
    ("양주시", "Yangju"),
    ("구리시", "Guri"),
    ("포천시", "Pocheon"),
    ("여주시", "Yeoju"),
    ("동두천시", "Dongducheon"),
    ("과천시", "Gwacheon"),
    ("가평군", "Gapyeong-gun"),
    ("양평군", "Yangpyeong-gun"),
    ("연천군", "Yeoncheon-gun"),
    // Gangwon
    ("춘천시", "Chuncheon"),
    ("원주시", "Wonju"),
    ("강릉시", "Gangneung"),
    ("동해시", "Donghae"),
    ("태백시", "Taebaek"),
    ("속초시", "Sokcho"),
    ("삼척시", "Samcheok"),
    ("홍천군", "Hongcheon-gun"),
    ("평창군", "Pyeongchang-gun"),
    ("정선군", "Jeongseon-gun"),
    ("양양군", "Yangyang-gun"),
    // Chungcheong
    ("청주시", "Cheongju"),
    ("충주시", "Chungju"),
    ("제천시", "Jecheon"),
    ("천안시", "Cheonan"),
    ("공주시", "Gongju"),
    ("보령시", "Boryeong"),
    ("아산시", "Asan"),
    ("서산시", "Seosan"),
    ("논산시", "Nonsan"),
    ("계룡시", "Gyeryong"),
    ("당진시", "Dangjin"),
    // Jeolla
    ("전주시", "Jeonju"),
    ("군산시", "Gunsan"),
    ("익산시", "Iksan"),
    ("정읍시", "Jeongeup"),
    ("남원시", "Namwon"),
    ("김제시", "Gimje"),
    ("목포시", "Mokpo"),
    ("여수시", "Yeosu"),
    ("순천시", "Suncheon"),
    ("나주시", "Naju"),
    ("광양시", "Gwangyang"),
    // Gyeongsang
    ("포항시", "Pohang"),
    ("경주시", "Gyeongju"),
    ("김천시", "Gimcheon"),
    ("안동시", "Andong"),
    ("구미시", "Gumi"),
    ("영주시", "Yeongju"),
    ("영천시", "Yeongcheon"),
    ("상주시", "Sangju"),
    ("문경시", "Mungyeong"),
    ("경산시", "Gyeongsan"),
    ("울릉군", "Ulleung-gun"),
    ("창원시", "Changwon"),
    ("진주시", "Jinju"),
    ("통영시", "Tongyeong"),
    ("사천시", "Sacheon"),
    ("김해시", "Gimhae"),
    ("밀양시", "Miryang"),
    ("거제시", "Geoje"),
    ("양산시", "Yangsan"),
    // Jeju
    ("제주시", "Jeju City"),
    ("서귀포시", "Seogwipo"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_province_lookup() {
        assert_eq!(KOREA.province("대전광역시"), Some("Daejeon"));
        assert_eq!(KOREA.province("서울특별시"), Some("Seoul"));
        assert_eq!(KOREA.province("강원특별자치도"), Some("Gangwon-do"));
    }

    #[test]
    fn test_county_lookup() {
        assert_eq!(KOREA.county("서구"), Some("Seo-gu"));
        assert_eq!(KOREA.county("종로구"), Some("Jongno-gu"));
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(KOREA.province("서울"), None);
        assert_eq!(KOREA.province(" 서울특별시"), None);
        assert_eq!(KOREA.county("가수원동"), None);
    }

    #[test]
    fn test_all_first_level_names_covered() {
        for name in [
            "서울특별시", "부산광역시", "대구광역시", "인천광역시", "광주광역시",
            "대전광역시", "울산광역시", "세종특별자치시", "경기도", "강원특별자치도",
            "충청북도", "충청남도", "전북특별자치도", "전라남도", "경상북도",
            "경상남도", "제주특별자치도",
        ] {
            assert!(KOREA.province(name).is_some(), "missing province {}", name);
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        for table in [PROVINCES, COUNTIES] {
            for (i, (k, _)) in table.iter().enumerate() {
                assert!(
                    table[i + 1..].iter().all(|(other, _)| other != k),
                    "duplicate key {}",
                    k
                );
            }
        }
    }

    #[test]
    fn test_custom_table_is_injectable() {
        const EMPTY: TransliterationTable = TransliterationTable::new(&[], &[]);
        assert_eq!(EMPTY.province("서울특별시"), None);
    }
}
