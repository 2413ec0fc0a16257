// =============================================================================
// ERROR — Les erreurs du catalogue
// =============================================================================
//
// Les axes eux-mêmes ne modélisent aucune erreur récupérable : les "échecs"
// qu'ils illustrent sont des rejets à la COMPILATION. Il ne reste donc que
// deux cas réels au runtime :
//   - l'écriture dans le sink échoue (stdout fermé, pipe cassé...)
//   - on demande un axe qui n'existe pas
//
// =============================================================================

use thiserror::Error;

/// Erreurs possibles pendant l'exécution du catalogue.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Le sink n'a pas pu écrire une ligne.
    #[error("échec d'écriture : {0}")]
    Io(#[from] std::io::Error),

    /// Aucun axe ne porte ce numéro.
    #[error("axe inconnu : {0} (attendu 1..=12)")]
    UnknownAxis(u8),
}

/// Résultat des opérations du catalogue.
pub type CatalogResult<T> = Result<T, CatalogError>;
