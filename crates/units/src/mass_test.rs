mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{Mass, EARTH_MASS_KG, LUNAR_MASS_KG, SOLAR_MASS_KG};

    #[test]
    fn test_mass_conversions() {
        let sun = Mass::from_solar_masses(1.0);
        assert_relative_eq!(sun.to_kg(), SOLAR_MASS_KG);
        assert_relative_eq!(sun.to_earth_masses(), SOLAR_MASS_KG / EARTH_MASS_KG);

        let earth = Mass::from_kg(EARTH_MASS_KG);
        assert_relative_eq!(earth.to_earth_masses(), 1.0);

        // Quartus is 2% of a lunar mass
        let quartus = Mass::from_lunar_masses(0.02);
        assert_relative_eq!(quartus.to_kg(), 0.02 * LUNAR_MASS_KG);
        assert_relative_eq!(quartus.to_lunar_masses(), 0.02);
    }

    #[test]
    fn test_mass_arithmetic_operations() {
        let mass1 = Mass::from_kg(2.0);
        let mass2 = Mass::from_kg(1.5);

        assert_relative_eq!((mass1 + mass2).to_kg(), 3.5);
        assert_relative_eq!((mass1 - mass2).to_kg(), 0.5);
        assert_relative_eq!((mass1 * 3.0).to_kg(), 6.0);
        assert_relative_eq!((mass1 / 4.0).to_kg(), 0.5);
        assert_relative_eq!(mass1 / mass2, 4.0 / 3.0);
    }

    #[test]
    fn test_moon_lighter_than_planet() {
        assert!(Mass::from_lunar_masses(1.0) < Mass::from_earth_masses(1.0));
        assert!(Mass::from_earth_masses(1.0) < Mass::from_solar_masses(1.0));
    }
}
