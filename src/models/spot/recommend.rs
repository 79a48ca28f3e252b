use super::types::Spot;

/// Number of spots shown in the home-page carousel.
pub const RECOMMEND_LIMIT: usize = 10;

/// Most-clicked visible spots, most popular first. Ties keep their input order.
pub fn recommend(mut spots: Vec<Spot>) -> Vec<Spot> {
    spots.sort_by(|a, b| b.click_count.cmp(&a.click_count));
    spots
        .into_iter()
        .filter(|s| !s.hidden)
        .take(RECOMMEND_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(id: i64, click_count: i64, hidden: bool) -> Spot {
        Spot {
            id,
            title: format!("Spot {id}"),
            subtitle: format!("景點{id}"),
            main_img: format!("https://img.example.com/{id}.jpg"),
            img: vec![],
            area: "亞洲".into(),
            country: "日本".into(),
            city: "京都".into(),
            brief: String::new(),
            description: String::new(),
            transportation: String::new(),
            price: 0,
            spot_category: "歷史景點".into(),
            click_count,
            is_selected_for_carousel: false,
            hidden,
        }
    }

    fn ids(spots: &[Spot]) -> Vec<i64> {
        spots.iter().map(|s| s.id).collect()
    }

    #[test]
    fn sorts_by_click_count_descending() {
        let out = recommend(vec![spot(1, 5, false), spot(2, 50, false), spot(3, 20, false)]);
        assert_eq!(ids(&out), vec![2, 3, 1]);
    }

    #[test]
    fn hidden_spots_are_skipped() {
        let out = recommend(vec![spot(1, 5, false), spot(2, 500, true), spot(3, 20, false)]);
        assert_eq!(ids(&out), vec![3, 1]);
    }

    #[test]
    fn keeps_at_most_ten_visible_spots() {
        let mut spots: Vec<Spot> = (1..=15).map(|i| spot(i, i * 10, false)).collect();
        spots.push(spot(99, 1000, true));
        let out = recommend(spots);
        assert_eq!(out.len(), RECOMMEND_LIMIT);
        assert_eq!(out[0].id, 15);
        assert_eq!(out[9].id, 6);
    }

    #[test]
    fn ties_keep_input_order() {
        let out = recommend(vec![spot(4, 7, false), spot(2, 7, false), spot(9, 7, false)]);
        assert_eq!(ids(&out), vec![4, 2, 9]);
    }

    #[test]
    fn empty_input() {
        assert!(recommend(vec![]).is_empty());
    }
}
