//! Catalog of the cities the dashboards can be pointed at.

use payloads::{CityId, Coordinates, Location};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub id: &'static str,
    /// Display name in Russian.
    pub name: &'static str,
    pub name_en: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub country: &'static str,
}

impl City {
    pub fn city_id(&self) -> CityId {
        CityId(self.id.to_string())
    }

    /// Requests for a catalog city are made by id, so the backend resolves
    /// the coordinates itself.
    pub fn location(&self) -> Location {
        Location::City(self.city_id())
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

const fn city(
    id: &'static str,
    name: &'static str,
    name_en: &'static str,
    latitude: f64,
    longitude: f64,
    country: &'static str,
) -> City {
    City {
        id,
        name,
        name_en,
        latitude,
        longitude,
        country,
    }
}

pub const CITIES: &[City] = &[
    city("almaty", "Алматы", "Almaty", 43.2220, 76.8512, "Kazakhstan"),
    city("astana", "Астана", "Astana", 51.1694, 71.4491, "Kazakhstan"),
    city("pavlodar", "Павлодар", "Pavlodar", 52.2873, 76.9665, "Kazakhstan"),
    city("ekibastuz", "Екибастуз", "Ekibastuz", 51.7244, 75.3232, "Kazakhstan"),
    city("aktau", "Актау", "Aktau", 43.6506, 51.1603, "Kazakhstan"),
    city("los-angeles", "Лос-Анджелес", "Los Angeles", 34.0522, -118.2437, "USA"),
    city("miami", "Майами", "Miami", 25.7617, -80.1918, "USA"),
    city("sydney", "Сидней", "Sydney", -33.8688, 151.2093, "Australia"),
    city("perth", "Перт", "Perth", -31.9505, 115.8605, "Australia"),
    city("london", "Лондон", "London", 51.5074, -0.1278, "UK"),
    city("paris", "Париж", "Paris", 48.8566, 2.3522, "France"),
    city("barcelona", "Барселона", "Barcelona", 41.3851, 2.1734, "Spain"),
    city("tokyo", "Токио", "Tokyo", 35.6762, 139.6503, "Japan"),
    city("singapore", "Сингапур", "Singapore", 1.3521, 103.8198, "Singapore"),
    city("dubai", "Дубай", "Dubai", 25.2048, 55.2708, "UAE"),
    city("sao-paulo", "Сан-Паулу", "São Paulo", -23.5505, -46.6333, "Brazil"),
    city("buenos-aires", "Буэнос-Айрес", "Buenos Aires", -34.6037, -58.3816, "Argentina"),
    city("cairo", "Каир", "Cairo", 30.0444, 31.2357, "Egypt"),
    city("cape-town", "Кейптаун", "Cape Town", -33.9249, 18.4241, "South Africa"),
];

pub const DEFAULT_CITY: &City = &CITIES[0];

/// Look up a catalog city by id.
pub fn find(id: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_city_is_almaty() {
        assert_eq!(DEFAULT_CITY.name_en, "Almaty");
        assert_eq!(DEFAULT_CITY.location(), Location::city("almaty"));
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in CITIES.iter().enumerate() {
            assert!(
                CITIES[i + 1..].iter().all(|b| b.id != a.id),
                "duplicate city id {}",
                a.id
            );
        }
    }

    #[test]
    fn find_by_id() {
        let city = find("cape-town").unwrap();
        assert_eq!(city.country, "South Africa");
        assert_eq!(city.coordinates(), Coordinates::new(-33.9249, 18.4241));
        assert!(find("atlantis").is_none());
    }
}
